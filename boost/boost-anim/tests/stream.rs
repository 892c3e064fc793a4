use std::fs::{self, File};
use std::io::BufWriter;

use boost_anim::*;
use serde_json::Value;

// Golden: first Lorentz frame at v = 0.6 as a JSON line.
#[test]
fn golden_json_line() {
    let config = AnimationConfig::default();
    let frames = Animation::LorentzTwoPanel.frames(&config, Some(0.6), Some(2)).unwrap();
    let mut encoder = JsonLinesEncoder::new(Vec::new());
    Driver::new(Animation::LorentzTwoPanel, &config)
        .run(frames, &mut DrawList::default(), &mut encoder)
        .unwrap();
    let out = String::from_utf8(encoder.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["index"], 0);
    let ops = first["ops"].as_array().unwrap();
    let a = ops
        .iter()
        .find(|op| op["op"] == "point" && op["axis"] == "s_prime" && op["label"] == "A")
        .unwrap();
    let at = a["at"].as_array().unwrap();
    assert!((at[0].as_f64().unwrap() - 1.25).abs() < 1e-12);
    assert!((at[1].as_f64().unwrap() + 0.75).abs() < 1e-12);
    assert_eq!(a["ink"], serde_json::json!({ "event": "red" }));
    assert!(ops.iter().any(|op| op["axis"] == serde_json::json!({ "snapshot": "B" })));
}

#[test]
fn stream_file_in_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnimationConfig { out_dir: dir.path().join("out"), ..AnimationConfig::default() };
    fs::create_dir_all(&config.out_dir).unwrap();

    let animation = Animation::GalileanTwoPanel;
    let path = config.out_dir.join(animation.stream_name());
    let mut encoder = JsonLinesEncoder::new(BufWriter::new(File::create(&path).unwrap()));
    let frames = animation.frames(&config, None, Some(40)).unwrap();
    let n = Driver::new(animation, &config)
        .run(frames, &mut DrawList::default(), &mut encoder)
        .unwrap();
    drop(encoder);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(n, 40);
    assert_eq!(text.lines().count(), 40);
    for (i, line) in text.lines().enumerate() {
        let v: Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["index"], i);
    }
}
