use std::io::Write;

use dg_assets::mapping::*;
use dg_assets::registry::*;
use dg_core::CellType;
use ratatui::style::Color;

fn floor_only() -> AssetMapping {
    AssetMapping {
        tiles: vec![AssetMappingEntry {
            cell: CellType::Floor,
            tile: TileDefinition {
                tui_char: '.',
                tui_color: "white".to_string(),
                sprite: "floor.png".to_string(),
            },
        }],
    }
}

#[test]
fn test_classic_registry_covers_everything() {
    let registry = AssetRegistry::classic();
    assert!(registry.validate_coverage().is_ok());
    assert!(registry.missing().is_empty());
    assert_eq!(registry.get(CellType::Floor).unwrap().tui_char, '.');
    assert_eq!(registry.get(CellType::Wall).unwrap().tui_char, '#');
}

#[test]
fn test_missing_wall_is_reported() {
    let registry = AssetRegistry::new(floor_only());
    assert_eq!(registry.missing(), vec![CellType::Wall]);
    assert!(matches!(
        registry.validate_coverage(),
        Err(RegistryError::NotFound(CellType::Wall))
    ));
    assert!(registry.get(CellType::Wall).is_err());
}

#[test]
fn test_empty_cells_need_no_tile() {
    let registry = AssetRegistry::classic();
    assert!(registry.get(CellType::Empty).is_err());
    assert!(!registry.missing().contains(&CellType::Empty));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&AssetMapping::classic()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let registry = AssetRegistry::load_from_file(file.path()).unwrap();
    assert_eq!(registry.mapping(), &AssetMapping::classic());
}

#[test]
fn test_load_incomplete_file_fails_coverage() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&floor_only()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    assert!(matches!(
        AssetRegistry::load_from_file(file.path()),
        Err(RegistryError::NotFound(CellType::Wall))
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        AssetRegistry::load_from_file("/nonexistent/tiles.json"),
        Err(RegistryError::Io(_))
    ));
}

#[test]
fn test_parse_color() {
    assert_eq!(AssetRegistry::parse_color("Gray"), Some(Color::Gray));
    assert_eq!(AssetRegistry::parse_color("light_blue"), Some(Color::LightBlue));
    assert_eq!(AssetRegistry::parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    assert_eq!(AssetRegistry::parse_color("chartreuse"), None);
}
