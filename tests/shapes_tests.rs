use std::collections::HashSet;

use block_blast::core::shapes::shape_bounds;
use block_blast::core::{get_shape, ShapeGeometry, DRAW_TABLE};
use block_blast::types::{ShapeKind, MAX_PIECE_CELLS, SHAPE_COUNT};

#[test]
fn every_shape_is_nonempty_and_duplicate_free() {
    for kind in ShapeKind::ALL {
        let offsets = get_shape(kind);
        assert!(!offsets.is_empty(), "{kind:?}");
        assert!(offsets.len() <= MAX_PIECE_CELLS, "{kind:?}");
        let unique: HashSet<_> = offsets.iter().collect();
        assert_eq!(unique.len(), offsets.len(), "{kind:?} has duplicate offsets");
    }
}

#[test]
fn every_shape_contains_its_anchor() {
    for kind in ShapeKind::ALL {
        assert!(get_shape(kind).contains(&(0, 0)), "{kind:?}");
    }
}

#[test]
fn shape_queries_are_stable() {
    for kind in ShapeKind::ALL {
        assert_eq!(get_shape(kind), get_shape(kind));
        assert_eq!(kind.offsets(), get_shape(kind));
    }
}

#[test]
fn cell_counts_match_names() {
    let expected = [
        (ShapeKind::Single, 1),
        (ShapeKind::Horizontal2, 2),
        (ShapeKind::Vertical3, 3),
        (ShapeKind::Horizontal4, 4),
        (ShapeKind::Vertical5, 5),
        (ShapeKind::TLeft, 4),
        (ShapeKind::LMirrorFlip, 4),
        (ShapeKind::Square2, 4),
        (ShapeKind::Square3, 9),
    ];
    for (kind, count) in expected {
        assert_eq!(kind.cell_count(), count, "{kind:?}");
    }
}

#[test]
fn shapes_fit_the_preview_box() {
    for kind in ShapeKind::ALL {
        let (min_x, min_y, max_x, max_y) = shape_bounds(kind);
        assert!(min_x >= -2 && min_y >= -2 && max_x <= 2 && max_y <= 2, "{kind:?}");
    }
}

#[test]
fn draw_table_covers_every_kind() {
    let drawable: HashSet<_> = DRAW_TABLE.iter().copied().collect();
    assert_eq!(drawable.len(), SHAPE_COUNT);
    let l_flip = DRAW_TABLE.iter().filter(|&&k| k == ShapeKind::LFlip).count();
    assert_eq!(l_flip, 2);
}
