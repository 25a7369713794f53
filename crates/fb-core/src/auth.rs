//! # AuthorizationGate
//!
//! Pure predicates over (actor, resource) pairs, backed by a static
//! role-to-permission table built once at startup and consulted read-only.
//! Nothing here mutates state or consults external services; the caller
//! supplies an identity already validated upstream.

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::models::{Actor, Role};

/// Every grantable permission, in `scope:action` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    CreateThread,
    ReadThread,
    UpdateThread,
    DeleteThread,
    CreateSolution,
    ReadSolution,
    UpdateSolution,
    DeleteSolution,
    AcceptSolution,
    ModerateSolution,
    CreateComment,
    ReadComment,
    UpdateComment,
    DeleteComment,
    ReadUser,
    UpdateUser,
    DeleteUser,
    ManageUsers,
    AccessAdmin,
    ViewAuditLogs,
    ManageSystem,
}

impl Permission {
    pub const ALL: &'static [Permission] = &[
        Permission::CreateThread,
        Permission::ReadThread,
        Permission::UpdateThread,
        Permission::DeleteThread,
        Permission::CreateSolution,
        Permission::ReadSolution,
        Permission::UpdateSolution,
        Permission::DeleteSolution,
        Permission::AcceptSolution,
        Permission::ModerateSolution,
        Permission::CreateComment,
        Permission::ReadComment,
        Permission::UpdateComment,
        Permission::DeleteComment,
        Permission::ReadUser,
        Permission::UpdateUser,
        Permission::DeleteUser,
        Permission::ManageUsers,
        Permission::AccessAdmin,
        Permission::ViewAuditLogs,
        Permission::ManageSystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateThread => "thread:create",
            Permission::ReadThread => "thread:read",
            Permission::UpdateThread => "thread:update",
            Permission::DeleteThread => "thread:delete",
            Permission::CreateSolution => "solution:create",
            Permission::ReadSolution => "solution:read",
            Permission::UpdateSolution => "solution:update",
            Permission::DeleteSolution => "solution:delete",
            Permission::AcceptSolution => "solution:accept",
            Permission::ModerateSolution => "solution:moderate",
            Permission::CreateComment => "comment:create",
            Permission::ReadComment => "comment:read",
            Permission::UpdateComment => "comment:update",
            Permission::DeleteComment => "comment:delete",
            Permission::ReadUser => "user:read",
            Permission::UpdateUser => "user:update",
            Permission::DeleteUser => "user:delete",
            Permission::ManageUsers => "user:manage",
            Permission::AccessAdmin => "admin:access",
            Permission::ViewAuditLogs => "admin:audit",
            Permission::ManageSystem => "admin:system",
        }
    }

    fn is_admin_scoped(&self) -> bool {
        self.as_str().starts_with("admin:")
    }
}

const WARFIGHTER_PERMISSIONS: &[Permission] = &[
    Permission::CreateThread,
    Permission::ReadThread,
    Permission::UpdateThread,
    Permission::CreateSolution,
    Permission::ReadSolution,
    Permission::UpdateSolution,
    Permission::AcceptSolution,
    Permission::CreateComment,
    Permission::ReadComment,
    Permission::UpdateComment,
    Permission::ReadUser,
    Permission::UpdateUser,
];

const INNOVATOR_PERMISSIONS: &[Permission] = &[
    Permission::ReadThread,
    Permission::CreateSolution,
    Permission::ReadSolution,
    Permission::UpdateSolution,
    Permission::CreateComment,
    Permission::ReadComment,
    Permission::UpdateComment,
    Permission::ReadUser,
    Permission::UpdateUser,
];

/// Moderators hold every non-`admin:*` permission plus the audit-log grant.
static MODERATOR_PERMISSIONS: Lazy<Vec<Permission>> = Lazy::new(|| {
    Permission::ALL
        .iter()
        .copied()
        .filter(|p| !p.is_admin_scoped())
        .chain(std::iter::once(Permission::ViewAuditLogs))
        .collect()
});

impl Role {
    /// The static permission set for this role. Admin implicitly holds
    /// everything.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Warfighter => WARFIGHTER_PERMISSIONS,
            Role::Innovator => INNOVATOR_PERMISSIONS,
            Role::Moderator => &MODERATOR_PERMISSIONS,
            Role::Admin => Permission::ALL,
        }
    }
}

/// Table lookup used for coarse route gating by callers.
pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// Thread author, Moderator, or Admin may manage solution review status
/// (and accept a winner).
pub fn can_manage_status(actor: &Actor, thread_author_id: Uuid) -> bool {
    actor.id == thread_author_id || actor.is_staff()
}

/// Only the author may edit content.
pub fn can_edit_content(actor: &Actor, author_id: Uuid) -> bool {
    actor.id == author_id
}

/// Any authenticated actor may vote; anonymous callers may not.
pub fn can_vote(actor: Option<&Actor>) -> bool {
    actor.is_some()
}

/// The author or staff may delete content.
pub fn can_delete(actor: &Actor, author_id: Uuid) -> bool {
    can_edit_content(actor, author_id) || actor.is_staff()
}
