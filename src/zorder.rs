//! Stacking-order operations over the component list.
//!
//! Policy: jump-to-extreme. Raising a component assigns it `max(z) + 1`,
//! lowering assigns `min(z) - 1`. This keeps the relative order of every
//! other component untouched and has no dependency on sort stability.
//! Z-index values are not kept contiguous; rendering sorts by z-index
//! ascending immediately before paint or export, with ties resolved by
//! insertion order (stable sort).

use crate::model::Component;

/// Raise a component above everything else. No-op when `id` is unknown.
pub fn bring_forward(components: &mut [Component], id: &str) {
    if !components.iter().any(|c| c.id == id) {
        return;
    }
    let max_z = components.iter().map(|c| c.z_index).max().unwrap_or(0);
    if let Some(comp) = components.iter_mut().find(|c| c.id == id) {
        comp.z_index = max_z + 1;
    }
}

/// Lower a component below everything else. No-op when `id` is unknown.
pub fn send_backward(components: &mut [Component], id: &str) {
    if !components.iter().any(|c| c.id == id) {
        return;
    }
    let min_z = components.iter().map(|c| c.z_index).min().unwrap_or(0);
    if let Some(comp) = components.iter_mut().find(|c| c.id == id) {
        comp.z_index = min_z - 1;
    }
}

/// Components in paint order: z-index ascending, insertion order on ties.
pub fn render_order(components: &[Component]) -> Vec<&Component> {
    let mut ordered: Vec<&Component> = components.iter().collect();
    ordered.sort_by_key(|c| c.z_index);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::factory;

    fn three() -> Vec<Component> {
        (1..=3)
            .map(|i| {
                factory::create("text", format!("text-{}", i), 0.0, 0.0, i).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_send_backward_jumps_below_minimum() {
        let mut comps = three();
        send_backward(&mut comps, "text-3");
        let zs: Vec<i32> = comps.iter().map(|c| c.z_index).collect();
        assert_eq!(zs, vec![1, 2, 0]);
        assert_eq!(render_order(&comps)[0].id, "text-3");
    }

    #[test]
    fn test_bring_forward_jumps_above_maximum() {
        let mut comps = three();
        bring_forward(&mut comps, "text-1");
        assert_eq!(comps[0].z_index, 4);
        assert_eq!(render_order(&comps).last().unwrap().id, "text-1");
    }

    #[test]
    fn test_bring_forward_on_topmost_is_visually_idempotent() {
        let mut comps = three();
        bring_forward(&mut comps, "text-3");
        let before: Vec<String> = render_order(&comps).iter().map(|c| c.id.clone()).collect();
        bring_forward(&mut comps, "text-3");
        let after: Vec<String> = render_order(&comps).iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut comps = three();
        bring_forward(&mut comps, "ghost-1");
        send_backward(&mut comps, "ghost-1");
        let zs: Vec<i32> = comps.iter().map(|c| c.z_index).collect();
        assert_eq!(zs, vec![1, 2, 3]);
    }

    #[test]
    fn test_render_order_breaks_ties_by_insertion() {
        let mut comps = three();
        for c in comps.iter_mut() {
            c.z_index = 5;
        }
        let ids: Vec<&str> = render_order(&comps).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["text-1", "text-2", "text-3"]);
    }
}
