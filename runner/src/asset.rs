use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{Error as IoError, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::Font;

pub type BufReader = std::io::BufReader<File>;
pub type BufWriter = std::io::BufWriter<File>;

// Debug: expect working dir to be cargo project, so look for assets relative to that
#[cfg(debug_assertions)]
pub fn base_path() -> PathBuf {
    PathBuf::new()
}

// Release: always look for assets relative to the executable
#[cfg(not(debug_assertions))]
pub fn base_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: IoError },
    #[error("Error writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: IoError },
    #[error("Error parsing {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: serde_yml::Error,
    },
    #[error("Error reading {}: invalid font", .path.display())]
    InvalidFont { path: PathBuf },
    #[error(
        "Font file {} not found. Copy a TrueType font there or change `font` in config/menu.yaml",
        .path.display()
    )]
    MissingFont { path: PathBuf },
}

impl AssetError {
    pub fn not_found(&self) -> bool {
        match self {
            AssetError::Read { source, .. } | AssetError::Write { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            AssetError::MissingFont { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;

pub fn get_path(prefix: &str, asset_path: &str) -> PathBuf {
    let mut file_path = base_path();
    file_path.push(prefix);
    file_path.push(asset_path);
    file_path
}
pub fn open_reader(path: &Path) -> Result<BufReader> {
    log::info!("Reading {}", path.display());
    let file = File::open(path).map_err(|source| AssetError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufReader::new(file))
}
pub fn open_writer(path: &Path) -> Result<BufWriter> {
    log::info!("Writing {}", path.display());
    let file = File::create(path).map_err(|source| AssetError::Write {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

pub fn create_dir(dir: &str) -> Result<()> {
    let mut dir_path = base_path();
    dir_path.push(dir);
    if !dir_path.exists() {
        log::info!("Creating directory {}", dir_path.display());
        std::fs::create_dir_all(&dir_path).map_err(|source| AssetError::Write {
            path: dir_path,
            source,
        })?;
    }
    Ok(())
}

pub fn load_yaml_file<T>(prefix: &str, file: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = get_path(prefix, file);
    let reader = open_reader(&path)?;
    serde_yml::from_reader(reader).map_err(|source| AssetError::Format { path, source })
}
pub fn load_yaml_file_or_default<T>(prefix: &str, file: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = get_path(prefix, file);
    if path.exists() {
        let reader = open_reader(&path)?;
        serde_yml::from_reader(reader).map_err(|source| AssetError::Format { path, source })
    } else {
        log::info!("{} does not exist, using defaults instead", path.display());
        Ok(Default::default())
    }
}
pub fn save_yaml_file<T>(prefix: &str, file: &str, value: &T) -> Result<()>
where
    T: Serialize,
{
    let path = get_path(prefix, file);
    let writer = open_writer(&path)?;
    serde_yml::to_writer(writer, value).map_err(|source| AssetError::Format { path, source })
}

pub fn load_font_file(prefix: &str, file: &str) -> Result<Font> {
    let path = get_path(prefix, file);
    if !path.exists() {
        return Err(AssetError::MissingFont { path });
    }
    let mut reader = open_reader(&path)?;
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;
    Font::try_from_vec(buf).map_err(|_| AssetError::InvalidFont { path })
}
