use std::error::Error;
use std::fs;
use std::path::Path;

use crate::scene::Scene;

pub fn load_scene<T>(path: T) -> Result<Scene, Box<dyn Error>> where T: AsRef<Path> {
    let text = fs::read_to_string(path)?;
    let scene = serde_json::from_str(&text)?;

    Ok(scene)
}

pub fn save_scene<T>(scene: &Scene, path: T) -> Result<(), Box<dyn Error>> where T: AsRef<Path> {
    let text = serde_json::to_string_pretty(scene)?;
    fs::write(path, text)?;

    Ok(())
}
