use super::*;

#[test]
fn test_catalog_has_sixteen_distinct_pieces() {
    let mut seen = std::collections::HashSet::new();
    for p in Piece::ALL {
        assert!(seen.insert((p.shape(), p.color(), p.height(), p.filling())));
    }
    assert_eq!(seen.len(), PIECE_COUNT);
}

#[test]
fn test_distinct_pieces_overlap_at_most_three() {
    for a in Piece::ALL {
        for b in Piece::ALL {
            if a == b {
                assert_eq!(a.overlap(b), 4);
            } else {
                assert!(a.overlap(b) <= 3, "{a:?} and {b:?} differ nowhere");
            }
        }
    }
}

#[test]
fn test_catalog_order_matches_nested_enumeration() {
    // round/square -> dark/light -> low/high -> empty/full
    assert_eq!(
        Piece::ALL[0],
        Piece::new(Shape::Round, Color::Dark, Height::Low, Filling::Empty)
    );
    assert_eq!(
        Piece::ALL[1],
        Piece::new(Shape::Round, Color::Dark, Height::Low, Filling::Full)
    );
    assert_eq!(
        Piece::ALL[2],
        Piece::new(Shape::Round, Color::Dark, Height::High, Filling::Empty)
    );
    assert_eq!(
        Piece::ALL[4],
        Piece::new(Shape::Round, Color::Light, Height::Low, Filling::Empty)
    );
    assert_eq!(
        Piece::ALL[8],
        Piece::new(Shape::Square, Color::Dark, Height::Low, Filling::Empty)
    );
    assert_eq!(
        Piece::ALL[15],
        Piece::new(Shape::Square, Color::Light, Height::High, Filling::Full)
    );
}

#[test]
fn test_common_attributes() {
    let dark: Vec<Piece> = [0u8, 1, 2, 3].iter().filter_map(|&i| Piece::from_id(i)).collect();
    let mask = common_attributes(&dark);
    assert!(mask.contains(Attribute::Color));
    assert!(mask.contains(Attribute::Shape));
    assert!(!mask.contains(Attribute::Height));
    assert!(!mask.contains(Attribute::Filling));

    // 0b0000, 0b1111, 0b0011, 0b1100 share nothing
    let mixed: Vec<Piece> = [0u8, 15, 3, 12].iter().filter_map(|&i| Piece::from_id(i)).collect();
    assert!(common_attributes(&mixed).is_empty());
}

#[test]
fn test_piece_id_out_of_range() {
    assert!(Piece::from_id(16).is_none());
    assert!(Piece::try_from(200u8).is_err());
}
