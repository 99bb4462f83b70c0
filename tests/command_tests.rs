use arc_to_geo::commands::{
    execute_convert, load_document, validate_args, validate_submission_file, ArcSource,
    ConvertArgs,
};
use serde_json::json;
use std::path::{Path, PathBuf};

fn write_arc_json(dir: &Path) -> PathBuf {
    let arc = json!({
        "title": "Drought response",
        "description": "Leaf proteome under drought",
        "people": [{ "firstName": "Ada", "lastName": "Lovelace" }],
        "studies": [{
            "assays": [{
                "processSequence": [
                    {
                        "inputs": [{
                            "name": "S1",
                            "type": "Sample Name",
                            "characteristics": [{
                                "category": { "characteristicType": { "annotationValue": "organism" } },
                                "value": { "annotationValue": "Arabidopsis thaliana" }
                            }]
                        }],
                        "outputs": [{ "name": "E1", "type": "Extract Name" }],
                        "parameterValues": [{
                            "category": { "parameterName": { "annotationValue": "P" } },
                            "value": 5
                        }]
                    },
                    {
                        "inputs": [{ "name": "E1", "type": "Extract Name" }],
                        "outputs": [{ "name": "R1", "type": "Raw Data File" }],
                        "parameterValues": [{
                            "category": { "parameterName": { "annotationValue": "Q" } },
                            "value": 30
                        }]
                    }
                ]
            }]
        }]
    });

    let path = dir.join("arc.json");
    std::fs::write(&path, serde_json::to_string_pretty(&arc).unwrap()).unwrap();
    path
}

#[test]
fn test_convert_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_arc_json(temp_dir.path());
    let sheet = temp_dir.path().join("out/geo.tsv");
    let json_out = temp_dir.path().join("out/geo.json");

    let args = ConvertArgs {
        source: ArcSource::File(input),
        output_sheet: sheet.clone(),
        output_json: Some(json_out.clone()),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let submission = execute_convert(args).unwrap();
    assert_eq!(
        submission.samples.rows,
        vec![vec!["S1", "5", "30", "Arabidopsis thaliana", "R1"]]
    );

    let contents = std::fs::read_to_string(&sheet).unwrap();
    assert!(contents.contains("Sample name\t[P]P\t[P]Q\t[C]organism\traw file"));
    assert!(validate_submission_file(json_out).is_ok());
}

#[test]
fn test_convert_missing_assay_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_arc_json(temp_dir.path());

    let args = ConvertArgs {
        source: ArcSource::File(input),
        assay: 3,
        output_sheet: temp_dir.path().join("geo.tsv"),
        ..Default::default()
    };

    assert!(execute_convert(args).is_err());
}

#[test]
fn test_convert_without_raw_files_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("arc.json");
    std::fs::write(
        &input,
        json!({
            "studies": [{ "assays": [{ "processSequence": [
                { "inputs": [{ "name": "S1" }], "outputs": [{ "name": "E1" }] }
            ] }] }]
        })
        .to_string(),
    )
    .unwrap();

    let sheet = temp_dir.path().join("geo.tsv");
    let args = ConvertArgs {
        source: ArcSource::File(input),
        output_sheet: sheet.clone(),
        ..Default::default()
    };

    assert!(execute_convert(args).is_err());
    assert!(!sheet.exists());
}

#[test]
fn test_load_document_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        source: ArcSource::File(write_arc_json(temp_dir.path())),
        ..Default::default()
    };

    let document = load_document(&args).unwrap();
    assert_eq!(document.title.as_deref(), Some("Drought response"));
    assert_eq!(document.studies[0].assays[0].process_sequence.len(), 2);
}

#[test]
fn test_validate_args_missing_input_file() {
    let args = ConvertArgs {
        source: ArcSource::File(PathBuf::from("/nonexistent/arc.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_arc_path_not_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = write_arc_json(temp_dir.path());

    let args = ConvertArgs {
        source: ArcSource::Directory(file),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_same_outputs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        source: ArcSource::Directory(temp_dir.path().to_path_buf()),
        output_sheet: PathBuf::from("geo.out"),
        output_json: Some(PathBuf::from("geo.out")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_quote_delimiter() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        source: ArcSource::Directory(temp_dir.path().to_path_buf()),
        delimiter: b'"',
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_directory_ok() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ConvertArgs {
        source: ArcSource::Directory(temp_dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}
