use std::collections::HashMap;

// Maps an original label to its position in the requested subset.
// If a label is listed more than once, its first position wins.
pub fn label_lookup(subset: &[i64]) -> HashMap<i64, i64> {
    let mut lookup = HashMap::with_capacity(subset.len());
    for (position, &label) in subset.iter().enumerate() {
        if lookup.contains_key(&label) {
            log::warn!("Label {} is listed more than once in subset {:?}", label, subset);
            continue;
        }
        lookup.insert(label, position as i64);
    }
    lookup
}

// Rewrite every label through the lookup in a single pass.
// Labels without an entry are left as they are.
pub fn remap_labels(labels: &mut [i64], lookup: &HashMap<i64, i64>) {
    for label in labels.iter_mut() {
        if let Some(&new_label) = lookup.get(label) {
            *label = new_label;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_to_subset_position() {
        let mut labels = vec![3, 7, 7, 3, 3];
        remap_labels(&mut labels, &label_lookup(&[3, 7]));
        assert_eq!(labels, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_remap_does_not_chain() {
        // A sequential in-place rewrite would turn 1 -> 0 and then every 0 -> 1
        let mut labels = vec![0, 1, 0, 1];
        remap_labels(&mut labels, &label_lookup(&[1, 0]));
        assert_eq!(labels, vec![1, 0, 1, 0]);

        let mut labels = vec![2, 0, 1];
        remap_labels(&mut labels, &label_lookup(&[1, 2, 0]));
        assert_eq!(labels, vec![1, 2, 0]);
    }

    #[test]
    fn test_duplicate_subset_entry_keeps_first_position() {
        let lookup = label_lookup(&[4, 9, 4]);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup[&4], 0);
        assert_eq!(lookup[&9], 1);
    }

    #[test]
    fn test_unlisted_labels_unchanged() {
        let mut labels = vec![5, 6];
        remap_labels(&mut labels, &label_lookup(&[6]));
        assert_eq!(labels, vec![5, 0]);
    }
}
