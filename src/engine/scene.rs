//! Scene progression: an intro screen that hands over to the map on the
//! first key press.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Title screen waiting for any key
    Intro,
    /// Navigable hex map
    Map,
}

pub struct SceneDirector {
    scene: Scene,
}

impl SceneDirector {
    pub fn new() -> Self {
        Self {
            scene: Scene::Intro,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Advance from the intro to the map. Returns the new scene if a
    /// transition happened; key presses on the map are not scene input.
    pub fn on_key_down(&mut self) -> Option<Scene> {
        match self.scene {
            Scene::Intro => {
                self.scene = Scene::Map;
                log::info!("Scene transition: {:?} -> {:?}", Scene::Intro, Scene::Map);
                Some(Scene::Map)
            }
            Scene::Map => None,
        }
    }
}

impl Default for SceneDirector {
    fn default() -> Self {
        Self::new()
    }
}
