//! Directional input snapshot read once per step

use std::str::FromStr;

use glam::Vec3;

/// Pressed state of the four movement directions (plus jump), copied out of the
/// host's key map before each step.
///
/// `up` moves toward `-z`, `down` toward `+z`, `left` toward `-x` and `right`
/// toward `+x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl DirectionalInput {
    pub const NONE: DirectionalInput = DirectionalInput {
        up: false,
        down: false,
        left: false,
        right: false,
        jump: false,
    };

    pub fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
            jump: false,
        }
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// Unit horizontal direction of the pressed keys.
    ///
    /// `None` when nothing is pressed or opposite keys cancel out.
    pub fn direction(&self) -> Option<Vec3> {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec3::new(axis(self.left, self.right), 0.0, axis(self.up, self.down)).try_normalize()
    }

    /// Desired horizontal velocity at `speed`, `None` without directional input.
    pub fn desired_velocity(&self, speed: f32) -> Option<Vec3> {
        self.direction().map(|d| d * speed)
    }
}

/// Parses `none`, a single direction, or directions joined with `-` or `+`
/// (`up-right`, `down+left+jump`).
impl FromStr for DirectionalInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = DirectionalInput::NONE;
        let key = s.trim().to_ascii_lowercase();
        if key.is_empty() || key == "none" {
            return Ok(input);
        }
        for part in key.split(['-', '+']) {
            match part {
                "up" => input.up = true,
                "down" => input.down = true,
                "left" => input.left = true,
                "right" => input.right = true,
                "jump" => input.jump = true,
                other => return Err(format!("unknown input direction '{other}'")),
            }
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_has_no_direction() {
        assert_eq!(DirectionalInput::NONE.direction(), None);
        assert_eq!(DirectionalInput::new(true, true, false, false).direction(), None);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let v = DirectionalInput::new(true, false, false, true)
            .desired_velocity(3.0)
            .unwrap();
        assert!((v.length() - 3.0).abs() < 1e-5);
        assert!(v.x > 0.0 && v.z < 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_parse_combinations() {
        assert_eq!("none".parse::<DirectionalInput>(), Ok(DirectionalInput::NONE));
        assert_eq!(
            "up-right".parse::<DirectionalInput>(),
            Ok(DirectionalInput::new(true, false, false, true))
        );
        assert_eq!(
            "Down+LEFT+jump".parse::<DirectionalInput>(),
            Ok(DirectionalInput::new(false, true, true, false).with_jump(true))
        );
        assert!("sideways".parse::<DirectionalInput>().is_err());
    }
}
