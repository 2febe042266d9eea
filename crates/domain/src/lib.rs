//! zerohunger domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `recipes`: Ingredient matching against the fixed recipe catalog
//! - `validation`: Local form validation rules
//! - `ports`: Trait definitions for the backend collaborator (adapters)
//! - `usecases`: Application use cases / business logic

pub mod model;
pub mod ports;
pub mod recipes;
pub mod usecases;
pub mod validation;

pub use model::*;
pub use ports::*;

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Compute a deterministic object path for an avatar upload.
/// The content digest keeps re-uploads of the same image at the same path.
pub fn avatar_object_path(user_id: Uuid, bytes: &[u8], extension: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = format!("{:x}", hasher.finalize());
    format!("avatars/{}-{}.{}", user_id, &digest[..16], extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_path_is_deterministic_for_same_content() {
        let user = Uuid::nil();
        let a = avatar_object_path(user, b"image-bytes", "png");
        let b = avatar_object_path(user, b"image-bytes", "png");
        assert_eq!(a, b);
        assert!(a.starts_with("avatars/"));
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn avatar_path_differs_for_different_content() {
        let user = Uuid::nil();
        let a = avatar_object_path(user, b"first", "jpg");
        let b = avatar_object_path(user, b"second", "jpg");
        assert_ne!(a, b);
    }
}
