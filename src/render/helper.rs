// src/render/helper.rs

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::config::model::ConfigFile;
use crate::config::validation::ValidationList;
use crate::render::behavior::parse_behavior_spec;
use crate::types::{RenderBehavior, Rotation};

/// Mutable render state derived from a parsed [`ConfigFile`].
///
/// Created once after the configuration parsed successfully. The behaviour
/// specs from the command line are applied once; zoom levels and used
/// rotations are then filled in by the renderer as it works through the
/// maps. Not synchronised: callers sharing one helper across threads must
/// lock it themselves.
#[derive(Debug)]
pub struct RenderBehaviorHelper<'a> {
    config: &'a ConfigFile,

    render_behaviors: HashMap<String, [RenderBehavior; 4]>,
    world_zoomlevels: HashMap<String, u32>,
    map_zoomlevels: HashMap<String, u32>,
    world_rotations: HashMap<String, BTreeSet<Rotation>>,
}

impl<'a> RenderBehaviorHelper<'a> {
    /// Every rotation of every map starts out as `Auto`, every world at zoom
    /// level 0.
    pub fn new(config: &'a ConfigFile) -> Self {
        let render_behaviors = config
            .maps()
            .iter()
            .map(|m| (m.short_name().to_string(), [RenderBehavior::Auto; 4]))
            .collect();

        let world_zoomlevels = config
            .worlds()
            .map(|(name, _)| (name.to_string(), 0))
            .collect();

        Self {
            config,
            render_behaviors,
            world_zoomlevels,
            map_zoomlevels: HashMap::new(),
            world_rotations: HashMap::new(),
        }
    }

    pub fn config(&self) -> &'a ConfigFile {
        self.config
    }

    /// Rotations of `world` that have rendered output so far.
    pub fn used_rotations(&self, world: &str) -> Option<&BTreeSet<Rotation>> {
        self.world_rotations.get(world)
    }

    /// Add `rotations` to the used rotations of `world`. Never removes any.
    pub fn set_used_rotations(&mut self, world: &str, rotations: &BTreeSet<Rotation>) {
        self.world_rotations
            .entry(world.to_string())
            .or_default()
            .extend(rotations.iter().copied());
    }

    pub fn world_zoomlevel(&self, world: &str) -> Option<u32> {
        self.world_zoomlevels.get(world).copied()
    }

    /// Zoom level of `map`, 0 until the renderer reported one.
    pub fn map_zoomlevel(&self, map: &str) -> u32 {
        self.map_zoomlevels.get(map).copied().unwrap_or(0)
    }

    pub fn set_world_zoomlevel(&mut self, world: &str, zoomlevel: u32) {
        self.world_zoomlevels.insert(world.to_string(), zoomlevel);
    }

    pub fn set_map_zoomlevel(&mut self, map: &str, zoomlevel: u32) {
        self.map_zoomlevels.insert(map.to_string(), zoomlevel);
    }

    pub fn render_behavior(&self, map: &str, rotation: Rotation) -> Option<RenderBehavior> {
        self.render_behaviors
            .get(map)
            .map(|slots| slots[rotation.index()])
    }

    /// Set the behaviour of one rotation of `map`, or of all four when
    /// `rotation` is `None`.
    pub fn set_render_behavior(
        &mut self,
        map: &str,
        rotation: Option<Rotation>,
        behavior: RenderBehavior,
    ) {
        let slots = self
            .render_behaviors
            .entry(map.to_string())
            .or_insert([RenderBehavior::Auto; 4]);
        match rotation {
            Some(r) => slots[r.index()] = behavior,
            None => *slots = [behavior; 4],
        }
    }

    /// True iff every rotation `map` declares is set to `Skip`.
    pub fn is_complete_render_skip(&self, map: &str) -> bool {
        self.all_rotations_are(map, RenderBehavior::Skip)
    }

    /// True iff every rotation `map` declares is set to `Force`.
    pub fn is_complete_render_force(&self, map: &str) -> bool {
        self.all_rotations_are(map, RenderBehavior::Force)
    }

    fn all_rotations_are(&self, map: &str, behavior: RenderBehavior) -> bool {
        let Some(section) = self.config.map(map) else {
            return false;
        };
        section
            .rotations()
            .iter()
            .all(|r| self.render_behavior(map, *r) == Some(behavior))
    }

    /// Apply `behavior` to every `map[:rotation]` token of `spec`.
    ///
    /// Tokens naming an unknown map, an unknown rotation or a rotation the
    /// map does not render are skipped. Each skipped token is logged and
    /// returned as a warning.
    pub fn set_render_behaviors(&mut self, spec: &str, behavior: RenderBehavior) -> ValidationList {
        let config = self.config;
        let mut warnings = ValidationList::new();

        for token in parse_behavior_spec(spec) {
            let Some(section) = config.map(&token.map) else {
                let text = format!("Unknown map '{}'.", token.map);
                warn!("{text}");
                warnings.warning(text);
                continue;
            };

            let rotation = match &token.rotation {
                None => None,
                Some(name) => {
                    let Some(rotation) = Rotation::from_short_name(name) else {
                        let text = format!("Unknown rotation '{name}'.");
                        warn!("{text}");
                        warnings.warning(text);
                        continue;
                    };
                    if !section.rotations().contains(&rotation) {
                        let text =
                            format!("Map '{}' does not have rotation '{name}'.", token.map);
                        warn!("{text}");
                        warnings.warning(text);
                        continue;
                    }
                    Some(rotation)
                }
            };

            debug!(map = %token.map, ?rotation, %behavior, "setting render behaviour");
            self.set_render_behavior(&token.map, rotation, behavior);
        }

        warnings
    }

    /// Apply the command-line behaviour options in their fixed order.
    ///
    /// `skip_all` marks everything `Skip` (otherwise `skip` is applied),
    /// then `auto`, then `force`; a later spec wins over an earlier one for
    /// the same (map, rotation).
    pub fn parse_render_behaviors(
        &mut self,
        skip_all: bool,
        skip: &str,
        auto: &str,
        force: &str,
    ) -> ValidationList {
        let config = self.config;
        let mut warnings = ValidationList::new();

        if skip_all {
            for map in config.maps() {
                self.render_behaviors
                    .insert(map.short_name().to_string(), [RenderBehavior::Skip; 4]);
            }
        } else {
            warnings.extend(self.set_render_behaviors(skip, RenderBehavior::Skip));
        }
        warnings.extend(self.set_render_behaviors(auto, RenderBehavior::Auto));
        warnings.extend(self.set_render_behaviors(force, RenderBehavior::Force));

        warnings
    }
}
