//! Equirectangular HDR to cubemap conversion for the environment light.

use std::f32::consts::PI;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use half::f16;

use crate::engine::error::{LoadError, LoadResult};

/// Bytes per texel in the generated `Rgba16Float` cubemap.
const CUBE_TEXEL_SIZE: usize = 4 * 2;

/// Unit direction through texel `(x, y)` of cubemap face `face`.
///
/// Faces follow the wgpu layer order `+X, -X, +Y, -Y, +Z, -Z`.
pub fn cube_face_direction(face: usize, x: u32, y: u32, size: u32) -> Vec3 {
    let u = 2.0 * (x as f32 + 0.5) / size as f32 - 1.0;
    let v = 2.0 * (y as f32 + 0.5) / size as f32 - 1.0;
    let dir = match face {
        0 => Vec3::new(1.0, -v, -u),
        1 => Vec3::new(-1.0, -v, u),
        2 => Vec3::new(u, 1.0, v),
        3 => Vec3::new(u, -1.0, -v),
        4 => Vec3::new(u, -v, 1.0),
        _ => Vec3::new(-u, -v, -1.0),
    };
    dir.normalize()
}

/// Equirectangular texture coordinate (`[0, 1]`, v down) for a direction.
pub fn direction_to_equirect_uv(dir: Vec3) -> Vec2 {
    let u = dir.z.atan2(dir.x) / (2.0 * PI) + 0.5;
    let v = 0.5 - dir.y.clamp(-1.0, 1.0).asin() / PI;
    Vec2::new(u, v)
}

/// Resamples an equirectangular image into a cubemap suitable for
/// `EnvironmentMapLight`. Nearest-texel sampling.
pub fn equirect_to_cubemap(source: &Image, face_size: u32) -> LoadResult<Image> {
    if face_size == 0 {
        return Err(LoadError::EnvironmentFormat(
            "cubemap face size must be non-zero".to_string(),
        ));
    }
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(LoadError::EnvironmentFormat("source image is empty".to_string()));
    }

    let face_bytes = (face_size * face_size) as usize * CUBE_TEXEL_SIZE;
    let mut data = Vec::with_capacity(face_bytes * 6);

    for face in 0..6 {
        for y in 0..face_size {
            for x in 0..face_size {
                let uv = direction_to_equirect_uv(cube_face_direction(face, x, y, face_size));
                let sx = ((uv.x * width as f32) as u32).min(width - 1);
                let sy = ((uv.y * height as f32) as u32).min(height - 1);

                let texel = source
                    .get_color_at(sx, sy)
                    .map_err(|err| LoadError::EnvironmentFormat(err.to_string()))?
                    .to_linear();

                for channel in [texel.red, texel.green, texel.blue, 1.0] {
                    data.extend_from_slice(&f16::from_f32(channel).to_le_bytes());
                }
            }
        }
    }

    let mut cubemap = Image::new(
        Extent3d {
            width: face_size,
            height: face_size,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba16Float,
        RenderAssetUsages::RENDER_WORLD,
    );
    cubemap.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });

    Ok(cubemap)
}
