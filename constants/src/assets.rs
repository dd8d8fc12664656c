/// Host serving the primary compressed scene.
pub const MODEL_HOST: &str = "https://d2fv4trqk78kwg.cloudfront.net";

/// Host serving large release assets (environment map, fallback scene).
pub const RELEASE_HOST: &str = "https://d2pnbujiw3xzto.cloudfront.net";

/// Asset source name mapped to `MODEL_HOST` on the web.
pub const MODEL_SOURCE: &str = "models";

/// Asset source name mapped to `RELEASE_HOST` on the web.
pub const RELEASE_SOURCE: &str = "release";

/// Local directories standing in for the hosts in native builds.
pub const NATIVE_MODEL_ROOT: &str = "assets/models";
pub const NATIVE_RELEASE_ROOT: &str = "assets/release";

/// Compressed scene loaded first.
pub const PRIMARY_MODEL_PATH: &str = "models://finalmodel-v1.glb";

/// Scene tried once when the primary fails to load or decode.
pub const FALLBACK_MODEL_PATH: &str = "release://model.glb";

/// Equirectangular HDR used as the environment light.
pub const ENVIRONMENT_PATH: &str = "release://warm_restaurant_night_4k.hdr";

/// Edge length in pixels of each generated environment cubemap face.
pub const ENVIRONMENT_FACE_SIZE: u32 = 256;

/// Multiplier applied to the environment light.
pub const ENVIRONMENT_INTENSITY: f32 = 900.0;

/// Optional runtime override document, relative to the default asset root.
pub const CONFIG_PATH: &str = "portfolio.json";
