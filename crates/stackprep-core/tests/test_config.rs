use stackprep_core::consts::{DEFAULT_BLOCK_EDGE, DEFAULT_SCAN_STRIDE};
use stackprep_core::pipeline::config::PreprocessConfig;

#[test]
fn test_minimal_config_uses_defaults() {
    let config: PreprocessConfig =
        serde_json::from_str(r#"{"input": "data", "output": "out.stk"}"#).unwrap();

    assert_eq!(config.selection.offset, 0);
    assert_eq!(config.selection.stride, DEFAULT_SCAN_STRIDE);
    assert_eq!(config.downsample.block.rows, DEFAULT_BLOCK_EDGE);
    assert_eq!(config.downsample.block.cols, DEFAULT_BLOCK_EDGE);
    assert!(config.downsample.grid.is_none());
    assert!(config.normalize.enabled);
}

#[test]
fn test_config_roundtrip() {
    let config: PreprocessConfig = serde_json::from_str(
        r#"{
            "input": "frames",
            "output": "result.stk",
            "selection": {"offset": 3, "stride": 10},
            "downsample": {"block": {"rows": 2, "cols": 4}, "grid": [8, 8]},
            "normalize": {"enabled": false}
        }"#,
    )
    .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let back: PreprocessConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.selection.offset, 3);
    assert_eq!(back.selection.stride, 10);
    assert_eq!(back.downsample.block, config.downsample.block);
    assert_eq!(back.downsample.grid, Some((8, 8)));
    assert!(!back.normalize.enabled);
}
