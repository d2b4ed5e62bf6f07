use crate::{
    config::{ControllerConfig, MotionMode},
    input::DirectionalInput,
    terrain::{FaceId, TerrainParams, TerrainProfile},
    world::ContactWorld,
};
use glam::Vec3;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmContactWorld {
    inner: RefCell<ContactWorld>,
}

#[wasm_bindgen]
impl WasmContactWorld {
    /// Create a walk-and-snap world on the named terrain profile
    ///
    /// # Arguments
    /// * `profile` - `flat`, `rolling-hills`, `valleys-and-peaks` or `rough-noise`
    #[wasm_bindgen(constructor)]
    pub fn new(profile: &str) -> Result<WasmContactWorld, JsValue> {
        Self::with_mode(profile, MotionMode::WalkAndSnap)
    }

    /// Create a legacy launch-and-bounce world
    ///
    /// # Arguments
    /// * `profile` - Terrain profile name
    /// * `vx`, `vy`, `vz` - Launch velocity applied once at spawn
    #[wasm_bindgen(js_name = newLegacy)]
    pub fn new_legacy(profile: &str, vx: f32, vy: f32, vz: f32) -> Result<WasmContactWorld, JsValue> {
        Self::with_mode(
            profile,
            MotionMode::LegacyBounce {
                launch_velocity: Vec3::new(vx, vy, vz),
            },
        )
    }

    /// Step simulation forward by dt seconds
    ///
    /// # Returns
    /// The contact event of this step, or `undefined`
    #[wasm_bindgen(js_name = step)]
    pub fn step(
        &self,
        dt: f32,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        jump: bool,
    ) -> Result<JsValue, JsValue> {
        let input = DirectionalInput::new(up, down, left, right).with_jump(jump);
        let event = self.inner.borrow_mut().step(dt, input);
        serde_wasm_bindgen::to_value(&event).map_err(to_js_err)
    }

    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&self) {
        self.inner.borrow_mut().reset();
    }

    /// Regenerate the terrain and respawn the body
    #[wasm_bindgen(js_name = setProfile)]
    pub fn set_profile(&self, profile: &str) -> Result<(), JsValue> {
        let profile: TerrainProfile = profile.parse().map_err(to_js_err)?;
        self.inner
            .borrow_mut()
            .set_profile(profile)
            .map_err(to_js_err)
    }

    /// All terrain faces as `{ id, a, b, c, normal, centroid }` objects
    #[wasm_bindgen(js_name = faces)]
    pub fn faces(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.borrow().faces()).map_err(to_js_err)
    }

    /// Body centre as `[x, y, z]`
    #[wasm_bindgen(js_name = position)]
    pub fn position(&self) -> Vec<f32> {
        self.inner.borrow().position().to_array().to_vec()
    }

    #[wasm_bindgen(js_name = contactVectors)]
    pub fn contact_vectors(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.borrow().contact_vectors()).map_err(to_js_err)
    }

    #[wasm_bindgen(js_name = currentFace)]
    pub fn current_face(&self) -> Option<u32> {
        self.inner.borrow().current_face().map(|id| id.0)
    }

    #[wasm_bindgen(js_name = setHighlight)]
    pub fn set_highlight(&self, id: Option<u32>) {
        self.inner.borrow_mut().set_highlight(id.map(FaceId));
    }
}

impl WasmContactWorld {
    fn with_mode(profile: &str, mode: MotionMode) -> Result<WasmContactWorld, JsValue> {
        let profile: TerrainProfile = profile.parse().map_err(to_js_err)?;
        let world = ContactWorld::new(
            profile,
            TerrainParams::default(),
            ControllerConfig::default(),
            mode,
        )
        .map_err(to_js_err)?;
        Ok(Self {
            inner: RefCell::new(world),
        })
    }
}
