mod common;

use common::constant_frame;
use tempfile::tempdir;

use stackprep_core::consts::FRAME_DATASET;
use stackprep_core::error::StackprepError;
use stackprep_core::io::container::write_array2;
use stackprep_core::source::{ContainerDirectory, FrameSource};

#[test]
fn test_directory_orders_by_filename() {
    let dir = tempdir().unwrap();
    for (name, value) in [("b.stk", 2.0), ("c.stk", 3.0), ("a.stk", 1.0)] {
        write_array2(&dir.path().join(name), FRAME_DATASET, &constant_frame(2, 2, value)).unwrap();
    }

    let source = ContainerDirectory::open(dir.path()).unwrap();
    assert_eq!(source.len(), 3);
    assert_eq!(source.load_frame(0).unwrap().data[[0, 0]], 1.0);
    assert_eq!(source.load_frame(1).unwrap().data[[0, 0]], 2.0);
    assert_eq!(source.load_frame(2).unwrap().data[[0, 0]], 3.0);
}

#[test]
fn test_directory_ignores_other_files() {
    let dir = tempdir().unwrap();
    write_array2(&dir.path().join("a.stk"), FRAME_DATASET, &constant_frame(2, 2, 1.0)).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a container").unwrap();

    let source = ContainerDirectory::open(dir.path()).unwrap();
    assert_eq!(source.len(), 1);
}

#[test]
fn test_out_of_range_index() {
    let dir = tempdir().unwrap();
    let source = ContainerDirectory::open(dir.path()).unwrap();
    let err = source.load_frame(0).unwrap_err();
    assert!(matches!(
        err,
        StackprepError::FrameIndexOutOfRange { index: 0, total: 0 }
    ));
}

#[test]
fn test_wrong_dataset_name_propagates() {
    let dir = tempdir().unwrap();
    write_array2(&dir.path().join("a.stk"), "other", &constant_frame(2, 2, 1.0)).unwrap();

    let source = ContainerDirectory::open(dir.path()).unwrap();
    let err = source.load_frame(0).unwrap_err();
    assert!(matches!(err, StackprepError::DatasetMismatch { .. }));
}
