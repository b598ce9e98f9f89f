// src/render/template.rs

//! Per-map descriptor embedded into the generated web template.
//!
//! For every map one object-literal entry is produced:
//!
//! ```text
//! "overview" : {
//! 	name: "World overview",
//! 	worldName: "myworld",
//! 	textureSize: 12,
//! 	tileSize: 384,
//! 	maxZoom: 7,
//! 	rotations: [0,2,],
//! },
//! ```

use std::fmt::Write;

use crate::render::helper::RenderBehaviorHelper;

/// Tile edge length in pixels for a given texture size.
///
/// Saturates, since a helper may be built over a map whose texture size
/// failed validation.
pub fn tile_size(texture_size: i32) -> i32 {
    texture_size.saturating_mul(32)
}

/// Escape `s` for use inside a double-quoted JavaScript string.
pub fn js_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

impl RenderBehaviorHelper<'_> {
    /// Descriptor entries for all maps, in declaration order.
    ///
    /// Reads the validated configuration and the current map zoom levels
    /// only; calling it twice without changes in between gives the same
    /// text.
    pub fn generate_template_javascript(&self) -> String {
        let config = self.config();
        let mut js = String::new();

        for map in config.maps() {
            let world_name = config
                .world(map.world())
                .and_then(|w| w.input_dir().file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let rotations: String = map
                .rotations()
                .iter()
                .map(|r| format!("{},", r.index()))
                .collect();

            // Writing into a String cannot fail.
            let _ = write!(
                js,
                "\"{short}\" : {{\n\
                 \tname: \"{long}\",\n\
                 \tworldName: \"{world}\",\n\
                 \ttextureSize: {texture_size},\n\
                 \ttileSize: {tile_size},\n\
                 \tmaxZoom: {max_zoom},\n\
                 \trotations: [{rotations}],\n\
                 }},",
                short = js_escape(map.short_name()),
                long = js_escape(map.long_name()),
                world = js_escape(&world_name),
                texture_size = map.texture_size(),
                tile_size = tile_size(map.texture_size()),
                max_zoom = self.map_zoomlevel(map.short_name()),
            );
        }

        js
    }
}
