use serde::{Deserialize, Serialize};

/// A requested (follower, creator) pairing. Both ids reference entities
/// owned by other services; zero is the only value treated as missing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FollowRequest {
    pub usuarios_idusuario: i32,
    pub creadores_idcreador: i32,
}

impl FollowRequest {
    pub fn has_required_fields(&self) -> bool {
        self.usuarios_idusuario != 0 && self.creadores_idcreador != 0
    }
}

/// A persisted follow relationship, echoed back to the caller on success.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FollowLink {
    pub usuarios_idusuario: i32,
    pub creadores_idcreador: i32,
}
