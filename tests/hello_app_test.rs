use anyhow::Result;
use hello::{decode, EmptyRecord, HelloApp, HelloError, HelloUtil, Printer};

#[test]
fn test_empty_object_always_decodes() -> Result<()> {
    let record: EmptyRecord = decode("{}")?;
    assert_eq!(record, EmptyRecord {});

    let padded: EmptyRecord = decode(" \n{ }\t")?;
    assert_eq!(padded, record);
    Ok(())
}

#[test]
fn test_end_to_end_output_is_exact() -> Result<()> {
    let mut app = HelloApp::new(HelloUtil, Printer::new(Vec::new()));
    app.run()?;

    let out = String::from_utf8(app.into_sink().into_inner())?;
    assert_eq!(out, format!("{}\n", HelloUtil::HELLO));
    assert_eq!(out.lines().count(), 1);
    Ok(())
}

#[test]
fn test_decode_error_reaches_caller() {
    let mut app = HelloApp::new(HelloUtil, Printer::new(Vec::new())).with_literal("{");

    match app.run() {
        Err(HelloError::Decode(e)) => {
            assert!(e.is_eof());
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}
