//! JavaScript binding exposing a `FastNoiseLite` class.
//!
//! Enum-valued settings take their variant name as a string
//! (`"OpenSimplex2"`, `"EuclideanSq"`, ...). Unknown names throw.
use std::str::FromStr;

use grain_core::{ConfigError, NoiseConfig, NoiseGenerator, Vector2, Vector3};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn to_js(err: ConfigError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn parse<T>(tag: &str) -> Result<T, JsValue>
where
    T: FromStr<Err = ConfigError>,
{
    tag.parse().map_err(to_js)
}

fn read_number(coord: &Object, key: &str) -> Result<Option<f64>, JsValue> {
    let value = Reflect::get(coord, &JsValue::from_str(key))?;
    if value.is_undefined() {
        return Ok(None);
    }
    value
        .as_f64()
        .map(Some)
        .ok_or_else(|| js_sys::TypeError::new(&format!("coordinate `{key}` is not a number")).into())
}

fn write_number(coord: &Object, key: &str, value: f64) -> Result<(), JsValue> {
    Reflect::set(coord, &JsValue::from_str(key), &JsValue::from_f64(value))?;
    Ok(())
}

#[wasm_bindgen(js_name = FastNoiseLite)]
pub struct FastNoiseLite {
    inner: NoiseGenerator,
}

#[wasm_bindgen(js_class = FastNoiseLite)]
impl FastNoiseLite {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<i32>) -> FastNoiseLite {
        let inner = seed.map(NoiseGenerator::new).unwrap_or_default();
        FastNoiseLite { inner }
    }

    #[wasm_bindgen(js_name = SetSeed)]
    pub fn set_seed(&mut self, seed: i32) {
        self.inner.set_seed(seed);
    }

    #[wasm_bindgen(js_name = SetFrequency)]
    pub fn set_frequency(&mut self, frequency: f64) {
        self.inner.set_frequency(frequency);
    }

    #[wasm_bindgen(js_name = SetNoiseType)]
    pub fn set_noise_type(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_noise_type(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetRotationType3D)]
    pub fn set_rotation_type_3d(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_rotation_type_3d(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetFractalType)]
    pub fn set_fractal_type(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_fractal_type(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetFractalOctaves)]
    pub fn set_fractal_octaves(&mut self, octaves: i32) {
        self.inner.set_fractal_octaves(octaves);
    }

    #[wasm_bindgen(js_name = SetFractalLacunarity)]
    pub fn set_fractal_lacunarity(&mut self, lacunarity: f64) {
        self.inner.set_fractal_lacunarity(lacunarity);
    }

    #[wasm_bindgen(js_name = SetFractalGain)]
    pub fn set_fractal_gain(&mut self, gain: f32) {
        self.inner.set_fractal_gain(gain);
    }

    #[wasm_bindgen(js_name = SetFractalWeightedStrength)]
    pub fn set_fractal_weighted_strength(&mut self, weighted_strength: f32) {
        self.inner.set_fractal_weighted_strength(weighted_strength);
    }

    #[wasm_bindgen(js_name = SetFractalPingPongStrength)]
    pub fn set_fractal_ping_pong_strength(&mut self, strength: f32) {
        self.inner.set_fractal_ping_pong_strength(strength);
    }

    #[wasm_bindgen(js_name = SetCellularDistanceFunction)]
    pub fn set_cellular_distance_function(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_cellular_distance_function(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetCellularReturnType)]
    pub fn set_cellular_return_type(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_cellular_return_type(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetCellularJitter)]
    pub fn set_cellular_jitter(&mut self, jitter: f32) {
        self.inner.set_cellular_jitter(jitter);
    }

    #[wasm_bindgen(js_name = SetDomainWarpType)]
    pub fn set_domain_warp_type(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_domain_warp_type(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetDomainWarpAmp)]
    pub fn set_domain_warp_amp(&mut self, amp: f32) {
        self.inner.set_domain_warp_amp(amp);
    }

    #[wasm_bindgen(js_name = SetDomainWarpSeed)]
    pub fn set_domain_warp_seed(&mut self, seed: i32) {
        self.inner.set_domain_warp_seed(seed);
    }

    #[wasm_bindgen(js_name = SetDomainWarpFrequency)]
    pub fn set_domain_warp_frequency(&mut self, frequency: f64) {
        self.inner.set_domain_warp_frequency(frequency);
    }

    #[wasm_bindgen(js_name = SetDomainWarpFractalType)]
    pub fn set_domain_warp_fractal_type(&mut self, tag: &str) -> Result<(), JsValue> {
        self.inner.set_domain_warp_fractal_type(parse(tag)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = SetDomainWarpFractalOctaves)]
    pub fn set_domain_warp_fractal_octaves(&mut self, octaves: i32) {
        self.inner.set_domain_warp_fractal_octaves(octaves);
    }

    #[wasm_bindgen(js_name = SetDomainWarpFractalLacunarity)]
    pub fn set_domain_warp_fractal_lacunarity(&mut self, lacunarity: f64) {
        self.inner.set_domain_warp_fractal_lacunarity(lacunarity);
    }

    #[wasm_bindgen(js_name = SetDomainWarpFractalGain)]
    pub fn set_domain_warp_fractal_gain(&mut self, gain: f32) {
        self.inner.set_domain_warp_fractal_gain(gain);
    }

    /// 2D noise when `z` is omitted, 3D otherwise.
    #[wasm_bindgen(js_name = GetNoise)]
    pub fn get_noise(&self, x: f64, y: f64, z: Option<f64>) -> f32 {
        match z {
            Some(z) => self.inner.get_noise_3d(x, y, z),
            None => self.inner.get_noise_2d(x, y),
        }
    }

    /// Warp `{x, y}` or `{x, y, z}` in place.
    #[wasm_bindgen(js_name = DomainWarp)]
    pub fn domain_warp(&self, coord: &Object) -> Result<(), JsValue> {
        let x = read_number(coord, "x")?.unwrap_or(0.0);
        let y = read_number(coord, "y")?.unwrap_or(0.0);
        match read_number(coord, "z")? {
            Some(z) => {
                let mut v = Vector3::new(x, y, z);
                self.inner.domain_warp_3d(&mut v);
                write_number(coord, "x", v.x)?;
                write_number(coord, "y", v.y)?;
                write_number(coord, "z", v.z)
            }
            None => {
                let mut v = Vector2::new(x, y);
                self.inner.domain_warp_2d(&mut v);
                write_number(coord, "x", v.x)?;
                write_number(coord, "y", v.y)
            }
        }
    }

    #[wasm_bindgen(js_name = DomainWrap)]
    pub fn domain_wrap(&self, coord: &Object) -> Result<(), JsValue> {
        self.domain_warp(coord)
    }

    #[wasm_bindgen(js_name = GetConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.config()).map_err(Into::into)
    }

    /// Replace every setting at once; rejects configurations that fail validation.
    #[wasm_bindgen(js_name = SetConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: NoiseConfig = serde_wasm_bindgen::from_value(config)?;
        config.validate().map_err(to_js)?;
        self.inner.set_config(config);
        Ok(())
    }
}

impl Default for FastNoiseLite {
    fn default() -> Self {
        Self::new(None)
    }
}
