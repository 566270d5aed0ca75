mod common;

use common::constant_frame;
use tempfile::tempdir;

use stackprep_core::consts::{FRAME_DATASET, STACK_DATASET};
use stackprep_core::error::StackprepError;
use stackprep_core::frame::BlockSize;
use stackprep_core::io::container::{read_array3, write_array2};
use stackprep_core::pipeline::config::{
    DownsampleConfig, NormalizeConfig, PreprocessConfig, SelectionConfig,
};
use stackprep_core::pipeline::run_preprocess;

fn write_frames(dir: &std::path::Path, values: &[f32]) {
    for (i, &v) in values.iter().enumerate() {
        let path = dir.join(format!("frame_{i:04}.stk"));
        write_array2(&path, FRAME_DATASET, &constant_frame(4, 4, v)).unwrap();
    }
}

fn config(input: &std::path::Path, output: &std::path::Path) -> PreprocessConfig {
    PreprocessConfig {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        selection: SelectionConfig {
            offset: 0,
            stride: 1,
        },
        downsample: DownsampleConfig {
            block: BlockSize::square(2),
            grid: None,
        },
        normalize: NormalizeConfig { enabled: true },
    }
}

#[test]
fn test_end_to_end_preprocess() {
    let input = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("preprocessed.stk");

    write_frames(input.path(), &[0.0, 10.0, 20.0]);

    let summary = run_preprocess(&config(input.path(), &output)).unwrap();
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.grid, (2, 2));
    assert_eq!(summary.range.min, 0.0);
    assert_eq!(summary.range.max, 20.0);

    let stack = read_array3(&output, STACK_DATASET).unwrap();
    assert_eq!(stack.dim(), (3, 2, 2));
    assert!(stack.index_axis(ndarray::Axis(0), 0).iter().all(|&v| v == 0.0));
    assert!(stack.index_axis(ndarray::Axis(0), 1).iter().all(|&v| v == 0.5));
    assert!(stack.index_axis(ndarray::Axis(0), 2).iter().all(|&v| v == 1.0));
}

#[test]
fn test_strided_run_skips_frames() {
    let input = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("preprocessed.stk");

    write_frames(input.path(), &[0.0, 500.0, 10.0]);

    let mut cfg = config(input.path(), &output);
    cfg.selection.stride = 2;

    let summary = run_preprocess(&cfg).unwrap();
    assert_eq!(summary.frames, 2);
    assert_eq!(summary.range.max, 10.0);
}

#[test]
fn test_raw_output_without_normalize() {
    let input = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("preprocessed.stk");

    write_frames(input.path(), &[0.0, 10.0, 20.0]);

    let mut cfg = config(input.path(), &output);
    cfg.normalize.enabled = false;

    run_preprocess(&cfg).unwrap();
    let stack = read_array3(&output, STACK_DATASET).unwrap();
    assert!(stack.index_axis(ndarray::Axis(0), 1).iter().all(|&v| v == 10.0));
}

#[test]
fn test_constant_data_fails_normalization() {
    let input = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("preprocessed.stk");

    write_frames(input.path(), &[7.0, 7.0]);

    let err = run_preprocess(&config(input.path(), &output)).unwrap_err();
    assert!(matches!(err, StackprepError::DegenerateRange(_)));
    // The aborted run must not leave an output file behind.
    assert!(!output.exists());
}

#[test]
fn test_explicit_grid() {
    let input = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("preprocessed.stk");

    write_frames(input.path(), &[0.0, 10.0]);

    let mut cfg = config(input.path(), &output);
    cfg.downsample.grid = Some((1, 2));

    let summary = run_preprocess(&cfg).unwrap();
    assert_eq!(summary.grid, (1, 2));

    let stack = read_array3(&output, STACK_DATASET).unwrap();
    assert_eq!(stack.dim(), (2, 1, 2));
}
