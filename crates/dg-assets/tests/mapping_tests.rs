use dg_assets::mapping::*;
use dg_core::CellType;

#[test]
fn test_serialize_tile_definition() {
    let def = TileDefinition {
        tui_char: '#',
        tui_color: "gray".to_string(),
        sprite: "tiles/wall.png".to_string(),
    };

    let json = serde_json::to_string(&def).unwrap();
    assert!(json.contains(r##""tui_char":"#""##));
    assert!(json.contains(r#""tui_color":"gray""#));
    assert!(json.contains(r#""sprite":"tiles/wall.png""#));
}

#[test]
fn test_deserialize_mapping() {
    let json = r#"{
        "tiles": [
            {
                "cell": "floor",
                "tile": {
                    "tui_char": ".",
                    "tui_color": "white"
                }
            }
        ]
    }"#;

    let mapping: AssetMapping = serde_json::from_str(json).unwrap();
    assert_eq!(mapping.tiles.len(), 1);
    let m = &mapping.tiles[0];
    assert_eq!(m.cell, CellType::Floor);
    assert_eq!(m.tile.tui_char, '.');
    assert_eq!(m.tile.sprite, "");
}

#[test]
fn test_bundled_tiles_file_parses() {
    let json = include_str!("../tiles.json");
    let mapping: AssetMapping = serde_json::from_str(json).unwrap();
    assert_eq!(mapping, AssetMapping::classic());
}

#[test]
fn test_later_entries_override() {
    let mut mapping = AssetMapping::classic();
    mapping.merge(AssetMapping {
        tiles: vec![AssetMappingEntry {
            cell: CellType::Wall,
            tile: TileDefinition {
                tui_char: '█',
                tui_color: "dark_gray".to_string(),
                sprite: String::new(),
            },
        }],
    });

    assert_eq!(mapping.tile_for(CellType::Wall).unwrap().tui_char, '█');
    assert_eq!(mapping.tile_for(CellType::Floor).unwrap().tui_char, '.');
    assert!(mapping.tile_for(CellType::Empty).is_none());
}
