use lipid::{Chain, Convention, Lipid, LipidClass, LipidDiagnostic, parse, render};

fn chains(lipid: &Lipid) -> Vec<String> {
    lipid
        .chains()
        .into_iter()
        .flatten()
        .map(Chain::to_string)
        .collect()
}

#[test]
fn plain_phosphatidylethanolamine() {
    let lipid = parse("PE (18:0/20:4)");
    assert!(lipid.is_parsed());
    assert_eq!(lipid.entry_token(), Some("PE"));
    assert_eq!(lipid.prefix(), Some(""));
    assert_eq!(chains(&lipid), ["18:0", "20:4"]);
    assert_eq!(lipid.class(), Some(LipidClass::PhosphatidylEthanolamine));
    assert_eq!(lipid.sub_class(), None);
    assert_eq!(
        render(&lipid, Convention::Standard).as_deref(),
        Some("PE(18:0_20:4)")
    );
}

#[test]
fn hydroxylated_phosphatidylethanolamine() {
    let lipid = parse("PE d18:0/20:4");
    assert_eq!(lipid.prefix(), Some("d"));
    assert_eq!(chains(&lipid), ["18:0", "20:4"]);
    assert_eq!(lipid.class(), Some(LipidClass::PhosphatidylEthanolamine));
    assert_eq!(
        render(&lipid, Convention::Standard).as_deref(),
        Some("PE(d18:0_20:4)")
    );
}

#[test]
fn lyso_phosphatidylethanolamine() {
    let lipid = parse("LPE d18:0/20:4");
    assert_eq!(lipid.entry_token(), Some("LPE"));
    assert_eq!(lipid.class(), Some(LipidClass::PhosphatidylEthanolamine));
    assert_eq!(lipid.sub_class().map(|s| s.to_string()).as_deref(), Some("LPE"));
    assert_eq!(
        render(&lipid, Convention::SubClass).as_deref(),
        Some("LPE(d18:0_20:4)")
    );
}

#[test]
fn triacylglycerol_with_known_chain() {
    let lipid = parse("TAG 50:5_FA14:2+H2O");
    assert_eq!(lipid.entry_token(), Some("TAG"));
    assert_eq!(lipid.class(), Some(LipidClass::Triacylglycerol));
    assert_eq!(chains(&lipid), ["50:5"]);
    assert!(lipid.known_chain_marker());
    assert_eq!(lipid.known_chain().map(Chain::to_string).as_deref(), Some("14:2"));
    assert_eq!(lipid.trailing_annotation(), Some("+H2O"));
    // The known chain is only written out under CHUV, which never uses parentheses
    assert_eq!(
        render(&lipid, Convention::Chuv).as_deref(),
        Some("TG 50:5_14:2")
    );
    assert_eq!(
        render(&lipid, Convention::Standard).as_deref(),
        Some("TG(50:5)")
    );
}

#[test]
fn hexosylceramide() {
    let lipid = parse("hcer d18:0/20:4");
    assert_eq!(lipid.class(), Some(LipidClass::HexosylCeramide));
    assert_eq!(lipid.sub_class(), None);
    assert_eq!(
        render(&lipid, Convention::Chuv).as_deref(),
        Some("HexCer d18:0/20:4")
    );
}

#[test]
fn invalid_lipid_name() {
    let lipid = parse("InvalidLipidName");
    assert!(!lipid.is_parsed());
    assert_eq!(lipid.raw_name(), "InvalidLipidName");
    for convention in Convention::ALL {
        assert_eq!(render(&lipid, convention), None);
    }
    let [LipidDiagnostic::ParseMismatch { name, .. }] = lipid.diagnostics() else {
        panic!("expected a single parse mismatch, got {:?}", lipid.diagnostics());
    };
    assert_eq!(name, "InvalidLipidName");
}

#[test]
fn rendering_does_not_change_the_record() {
    let lipid = parse("LPC O-16:0/FA18:1 [M+H]+");
    let before = lipid.clone();
    for convention in Convention::ALL {
        let _ = lipid.render(convention);
    }
    assert_eq!(lipid, before);
}
