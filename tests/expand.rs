use std::sync::Arc;

use itertools::iproduct;
use ndindex::{expand_bool_indices, BoolMask, CoordArray, ErrorKind, Index};

#[test]
fn mask_becomes_one_coordinate_array_per_dimension()
{
    let mask = Arc::new(BoolMask::new(vec![2, 2], vec![false, true, true, false]));
    let expanded = expand_bool_indices(&[Index::BooleanArray(mask)]).unwrap();
    assert_eq!(expanded.len(), 2);
    match (&expanded[0], &expanded[1]) {
        (Index::IntegerArray(rows), Index::IntegerArray(cols)) => {
            assert_eq!(rows.coords(), &[0, 1]);
            assert_eq!(cols.coords(), &[1, 0]);
        }
        other => panic!("expected two coordinate arrays, got {:?}", other),
    }
}

#[test]
fn all_true_mask_enumerates_every_coordinate()
{
    let mask = Arc::new(BoolMask::new(vec![2, 3], vec![true; 6]));
    let expanded = expand_bool_indices(&[Index::BooleanArray(mask)]).unwrap();
    let (rows, cols) = match (&expanded[0], &expanded[1]) {
        (Index::IntegerArray(r), Index::IntegerArray(c)) => (r.clone(), c.clone()),
        other => panic!("expected two coordinate arrays, got {:?}", other),
    };
    for (i, (r, c)) in iproduct!(0..2isize, 0..3isize).enumerate() {
        assert_eq!(rows.coords()[i], r);
        assert_eq!(cols.coords()[i], c);
    }
}

#[test]
fn scalar_booleans_become_integers()
{
    let raw = [Index::Boolean(true), Index::Boolean(false)];
    let expanded = expand_bool_indices(&raw).unwrap();
    assert_eq!(expanded, vec![Index::Integer(1), Index::Integer(0)]);
}

#[test]
fn other_kinds_pass_through()
{
    let coords = Arc::new(CoordArray::new(vec![1, 2]));
    let raw = [
        Index::Integer(-1),
        Index::Ellipsis,
        Index::NewAxis,
        Index::from(1..3),
        Index::IntegerArray(Arc::clone(&coords)),
    ];
    assert_eq!(Arc::strong_count(&coords), 2);

    let expanded = expand_bool_indices(&raw).unwrap();
    assert_eq!(expanded, raw);
    // the pass-through took its own reference
    assert_eq!(Arc::strong_count(&coords), 3);
}

#[test]
fn finder_failure_releases_earlier_entries()
{
    let coords = Arc::new(CoordArray::new(vec![0]));
    let bad_mask = Arc::new(BoolMask::new(vec![1; 33], vec![true]));
    let raw = [
        Index::IntegerArray(Arc::clone(&coords)),
        Index::BooleanArray(bad_mask),
    ];
    assert_eq!(Arc::strong_count(&coords), 2);

    let err = expand_bool_indices(&raw).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RankTooLarge);
    assert_eq!(Arc::strong_count(&coords), 2);
}

#[test]
fn rank_zero_mask_expands_to_nothing()
{
    let mask = Arc::new(BoolMask::new(vec![], vec![true]));
    let expanded = expand_bool_indices(&[Index::BooleanArray(mask)]).unwrap();
    assert!(expanded.is_empty());
}
