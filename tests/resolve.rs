use std::sync::Arc;

use ndindex::{
    bind_indices, resolve_subspace, resolve_view, CoordArray, ErrorKind, Index, Slice,
};

#[test]
fn integer_ellipsis_integer_pipeline()
{
    let raw = [Index::Integer(1), Index::Ellipsis, Index::Integer(0)];
    let dims = [2, 3, 4, 5];
    let strides = [60, 20, 5, 1];

    let bound = bind_indices(&raw, &dims).unwrap();
    let view = resolve_view(&bound, &dims, &strides).unwrap();
    assert_eq!(view.dims, vec![3, 4]);
    assert_eq!(view.strides, vec![20, 5]);
    assert_eq!(view.offset, 60);
    assert_eq!(view.ndim(), 2);
}

#[test]
fn integers_drop_dimensions_and_accumulate_offset()
{
    let bound = [Index::Integer(2), Index::Slice(Slice::new(1, 5, 2))];
    let view = resolve_view(&bound, &[4, 6], &[6, 1]).unwrap();
    assert_eq!(view.dims, vec![2]);
    assert_eq!(view.strides, vec![2]);
    assert_eq!(view.offset, 13);
}

#[test]
fn new_axis_gets_length_one_and_stride_zero()
{
    let bound = [Index::NewAxis, Index::Slice(Slice::new(0, 5, 1))];
    let view = resolve_view(&bound, &[5], &[1]).unwrap();
    assert_eq!(view.dims, vec![1, 5]);
    assert_eq!(view.strides, vec![0, 1]);
    assert_eq!(view.offset, 0);
}

#[test]
fn reversed_slice_has_negative_stride()
{
    let bound = [Index::Slice(Slice::new(4, -1, -1))];
    let view = resolve_view(&bound, &[5], &[1]).unwrap();
    assert_eq!(view.dims, vec![5]);
    assert_eq!(view.strides, vec![-1]);
    assert_eq!(view.offset, 4);
}

#[test]
fn unaddressed_trailing_dimensions_stay_whole()
{
    let bound = [Index::Integer(1)];
    let view = resolve_view(&bound, &[2, 3, 4], &[12, 4, 1]).unwrap();
    assert_eq!(view.dims, vec![3, 4]);
    assert_eq!(view.strides, vec![4, 1]);
    assert_eq!(view.offset, 12);

    // an empty index list is the identity view
    let view = resolve_view(&[], &[2, 3], &[3, 1]).unwrap();
    assert_eq!(view.dims, vec![2, 3]);
    assert_eq!(view.strides, vec![3, 1]);
    assert_eq!(view.offset, 0);
}

#[test]
fn array_index_reserves_a_dimension_in_subspace_mode()
{
    let coords = Arc::new(CoordArray::new(vec![0, 3]));
    let bound = [
        Index::IntegerArray(coords),
        Index::Slice(Slice::new(0, 5, 1)),
    ];
    let view = resolve_subspace(&bound, &[4, 5], &[5, 1]).unwrap();
    assert_eq!(view.dims, vec![5]);
    assert_eq!(view.strides, vec![1]);
    assert_eq!(view.offset, 0);
}

#[test]
fn array_index_is_rejected_in_view_mode()
{
    let coords = Arc::new(CoordArray::new(vec![0, 3]));
    let bound = [Index::IntegerArray(coords)];
    let err = resolve_view(&bound, &[4], &[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArrayIndicesNotAllowed);
}

#[test]
fn unbound_kinds_are_programming_errors()
{
    for index in [
        Index::Ellipsis,
        Index::SliceOpenStop { start: 0, step: 1 },
        Index::Boolean(true),
    ] {
        let err = resolve_view(&[index], &[4], &[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnboundIndexKind);
    }

    let err = resolve_view(&[Index::StringLabel("x".to_owned())], &[4], &[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedIndexKind);
}

#[test]
fn consuming_past_the_rank_fails()
{
    let bound = [Index::Integer(0), Index::Integer(0)];
    let err = resolve_view(&bound, &[4], &[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooManyIndices);
}
