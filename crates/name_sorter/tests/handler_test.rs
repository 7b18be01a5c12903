use ::std::fs;
use ::std::io;

use ::name_sorter::{
    LocalFileManager, NameError, NameParserService, NameSorterService, ProgramExit,
    SortNameCommandHandler, SortNameCommandRequest, SortNameError,
};
use ::tempfile::TempDir;

fn handler(
    dir: &TempDir,
) -> SortNameCommandHandler<NameSorterService, LocalFileManager, NameParserService> {
    SortNameCommandHandler::new(
        NameSorterService,
        LocalFileManager,
        NameParserService,
    )
    .with_output_file(dir.path().join("sorted-names-list.txt"))
}

#[test]
fn writes_and_displays_sorted_names() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("names.txt");
    fs::write(&input, "Charlie Brown\nAlice Johnson\n").unwrap();

    let mut out = Vec::new();
    let exit = handler(&dir)
        .handle_with(&SortNameCommandRequest::new(&input), &mut out, &mut io::sink())
        .unwrap();

    assert_eq!(exit, ProgramExit::Success);
    assert_eq!(String::from_utf8(out).unwrap(), "Alice Johnson\nCharlie Brown\n");
    assert_eq!(
        fs::read_to_string(dir.path().join("sorted-names-list.txt")).unwrap(),
        "Alice Johnson\nCharlie Brown\n"
    );
}

#[test]
fn nonexistent_path_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let mut err = Vec::new();
    let exit = handler(&dir)
        .handle_with(
            &SortNameCommandRequest::new(dir.path().join("missing.txt")),
            &mut io::sink(),
            &mut err,
        )
        .unwrap();

    assert_eq!(exit, ProgramExit::InvalidArguments);
    assert!(String::from_utf8(err).unwrap().starts_with("Input file not found"));
    assert!(!dir.path().join("sorted-names-list.txt").exists());
}

#[test]
fn too_many_given_names_propagates() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("names.txt");
    fs::write(&input, "John Paul George Ringo Lennon\n").unwrap();

    let result = handler(&dir).handle_with(
        &SortNameCommandRequest::new(&input),
        &mut io::sink(),
        &mut io::sink(),
    );

    match result {
        Err(SortNameError::InputIntegrity(NameError::TooManyGivenNames(raw))) => {
            assert_eq!(raw, "John Paul George Ringo Lennon");
        },
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!dir.path().join("sorted-names-list.txt").exists());
}
