//! Root and organizational unit lookup
//!
//! Resolution covers the root and the OUs directly under it. Deeper
//! hierarchies are not searched.

use crate::domain::ports::{Directory, DirectoryNode};
use crate::error::{OrgovError, OrgovResult};

/// The organization's root
pub fn resolve_root<D: Directory>(directory: &D) -> OrgovResult<DirectoryNode> {
    tracing::debug!("listing organization roots");
    let roots = directory
        .list_roots()
        .map_err(|e| OrgovError::remote("list-roots", "organization", e))?;
    roots.into_iter().next().ok_or(OrgovError::NoRoot)
}

/// Find a parent by name: empty or the root's own name yields the root,
/// otherwise an OU directly under the root.
pub fn find_parent<D: Directory>(
    directory: &D,
    root: &DirectoryNode,
    name: &str,
) -> OrgovResult<Option<DirectoryNode>> {
    if name.is_empty() || name == root.name {
        return Ok(Some(root.clone()));
    }
    find_child_ou(directory, &root.id, name)
}

/// Find an OU by name directly under a parent
pub fn find_child_ou<D: Directory>(
    directory: &D,
    parent_id: &str,
    name: &str,
) -> OrgovResult<Option<DirectoryNode>> {
    tracing::debug!(parent_id, "listing organizational units");
    let units = directory
        .list_child_ous(parent_id)
        .map_err(|e| OrgovError::remote("list-organizational-units-for-parent", parent_id, e))?;
    Ok(units.into_iter().find(|ou| ou.name == name))
}
