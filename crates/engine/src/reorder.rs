//! Reorder computation for drag-and-drop commits.
//!
//! These are pure functions over id sequences: they read the current order
//! and selection and produce the permutation to hand to
//! [`Collection::replace_order`](crate::collection::Collection::replace_order).
//! Malformed input (ids no longer present, target equal to the dragged item)
//! yields `None` rather than an error, since drag sources can lag behind
//! concurrent deletions.

/// Move `active_id` to the position `over_id` occupies.
///
/// The classic single-element list move: `active_id` is removed, then
/// inserted at the index `over_id` occupies in the shortened list, landing
/// immediately before the target. `[a, b, c, d]` with `active = b`,
/// `over = d` becomes `[a, c, b, d]`.
///
/// Returns `None` when `active_id == over_id` or either id is absent.
pub fn move_to(order: &[String], active_id: &str, over_id: &str) -> Option<Vec<String>> {
    if active_id == over_id {
        return None;
    }
    let from = order.iter().position(|id| id == active_id)?;
    order.iter().position(|id| id == over_id)?;

    let mut next = order.to_vec();
    let moved = next.remove(from);
    // over_id is still present: it differs from the removed id.
    let to = next.iter().position(|id| id == over_id)?;
    next.insert(to, moved);
    Some(next)
}

/// Compute the permutation for a completed drop of `active_id` onto
/// `over_id`, honoring a multi-selection.
///
/// With fewer than two selected ids, or a selection that does not include
/// `active_id`, this is the single-item move. Otherwise the selected items
/// move as one block, keeping their relative order:
///
/// - the order is partitioned into `moving` (selected) and `remaining`,
/// - the block lands after the target when the drag travels forward
///   (`active_id`'s original index below `over_id`'s) and before it when
///   the drag travels backward,
/// - a target that is itself part of the moving block falls back to the
///   single-item move of `active_id` alone.
///
/// Returns `None` for the no-op cases of [`move_to`].
pub fn compute_reorder(
    order: &[String],
    selection: &[String],
    active_id: &str,
    over_id: &str,
) -> Option<Vec<String>> {
    if active_id == over_id {
        return None;
    }
    let active_index = order.iter().position(|id| id == active_id)?;
    let over_index = order.iter().position(|id| id == over_id)?;

    let group_move = selection.len() >= 2 && selection.iter().any(|id| id == active_id);
    if !group_move {
        return move_to(order, active_id, over_id);
    }

    let selected = |id: &String| selection.iter().any(|s| s == id);
    let moving: Vec<String> = order.iter().filter(|id| selected(id)).cloned().collect();
    let mut remaining: Vec<String> = order.iter().filter(|id| !selected(id)).cloned().collect();

    let Some(target) = remaining.iter().position(|id| id == over_id) else {
        // Dropped onto a member of the moving block; group semantics do not
        // apply there, so only the dragged item moves.
        return move_to(order, active_id, over_id);
    };

    let insert_at = if active_index < over_index {
        target + 1
    } else {
        target
    };
    remaining.splice(insert_at..insert_at, moving);
    Some(remaining)
}
