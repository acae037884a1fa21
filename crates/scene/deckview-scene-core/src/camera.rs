#![allow(dead_code)]
//! Camera rig: position, look-at target and the focus lock.

use deckview_api_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// While locked, the transition driver owns the camera (focus-follow);
    /// escape releases it back to the orbit controls.
    pub locked: bool,
}

impl Camera {
    pub fn home(cfg: &Config) -> Self {
        Self {
            position: cfg.camera_home,
            target: cfg.camera_home_target,
            locked: false,
        }
    }
}
