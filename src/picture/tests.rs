use alloc::{string::String, vec};

use super::*;
use crate::error::ErrorKind;

fn marker(picture: &str) -> Marker {
    let compiled = compile(picture).unwrap();
    let mut markers = compiled.markers();
    let marker = markers.next().unwrap().clone();
    assert!(markers.next().is_none());
    marker
}

fn assert_invalid(picture: &str) {
    let err = compile(picture).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPicture, "{picture}");
}

#[test]
fn literals_and_escapes() {
    let picture = compile("[[[Y]]] at [H]").unwrap();
    let segments = picture.segments();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0], Segment::Literal(String::from("[")));
    assert!(matches!(&segments[1], Segment::Marker(m) if m.component() == Component::Year));
    assert_eq!(segments[2], Segment::Literal(String::from("] at ")));

    assert_eq!(compile("").unwrap(), Picture::default());
    assert_eq!(
        compile("no markers [[here]]").unwrap().segments(),
        &[Segment::Literal(String::from("no markers [here]"))]
    );
}

#[test]
fn components_and_defaults() {
    let year = marker("[Y]");
    assert_eq!(year.presentation(), &Presentation::Digits(DigitPattern::single()));
    assert_eq!(year.width(), None);

    assert_eq!(
        marker("[m]").presentation(),
        &Presentation::Digits(DigitPattern::double())
    );
    assert_eq!(
        marker("[F]").presentation(),
        &Presentation::Name(Some(LetterCase::Lower))
    );
    assert_eq!(marker("[E]").presentation(), &Presentation::Name(None));
    assert_eq!(
        marker("[Z]").presentation(),
        &Presentation::Offset(OffsetFormat::DEFAULT)
    );

    for (specifier, component) in [('d', Component::DayOfYear), ('w', Component::WeekOfMonth)] {
        assert_eq!(Component::from_specifier(specifier), Some(component));
        assert_eq!(component.specifier(), specifier);
    }
}

#[test]
fn whitespace_inside_markers_is_ignored() {
    assert_eq!(marker("[ M 01 ]"), marker("[M01]"));
    assert_eq!(marker("[Y , 2 - 2]"), marker("[Y,2-2]"));
}

#[test]
fn presentations() {
    assert_eq!(
        marker("[MI]").presentation(),
        &Presentation::Roman { lowercase: false }
    );
    assert_eq!(
        marker("[Da]").presentation(),
        &Presentation::Alphabetic { lowercase: true }
    );
    assert_eq!(
        marker("[YWw]").presentation(),
        &Presentation::Words(LetterCase::Title)
    );
    assert_eq!(
        marker("[MNn]").presentation(),
        &Presentation::Name(Some(LetterCase::Title))
    );
    assert_eq!(marker("[ZZ]").presentation(), &Presentation::Military);
    assert_eq!(
        marker("[ZN]").presentation(),
        &Presentation::Name(Some(LetterCase::Upper))
    );
    assert!(matches!(
        marker("[Z0:00]").presentation(),
        Presentation::Offset(OffsetFormat::Separated { hour_width: 1, separator: ':', .. })
    ));
}

#[test]
fn second_modifiers() {
    let ordinal = marker("[D1o]");
    assert_eq!(ordinal.form(), &NumberForm::Ordinal(None));
    assert_eq!(
        ordinal.presentation(),
        &Presentation::Digits(DigitPattern::single())
    );

    let feminine = marker("[Dwo(-e)]");
    assert_eq!(feminine.form(), &NumberForm::Ordinal(Some(String::from("-e"))));
    assert_eq!(
        feminine.presentation(),
        &Presentation::Words(LetterCase::Lower)
    );

    assert_eq!(marker("[Do]").form(), &NumberForm::Ordinal(None));
    assert_eq!(marker("[D1c]").form(), &NumberForm::Cardinal);
    assert!(marker("[Z0t]").traditional());
    assert!(!marker("[Z0]").traditional());
    assert_eq!(
        marker("[DAa]").presentation(),
        &Presentation::Alphabetic { lowercase: false }
    );
}

#[test]
fn widths() {
    let width = |picture| marker(picture).width().unwrap();
    assert_eq!(width("[Y,2-2]"), Width { min: 2, max: Some(2) });
    assert_eq!(width("[Y,3]"), Width { min: 3, max: None });
    assert_eq!(width("[Y,*-4]"), Width { min: 1, max: Some(4) });
    assert_eq!(width("[Y,2-*]"), Width { min: 2, max: None });
    assert_eq!(width("[MNn,*]"), Width { min: 1, max: None });
    assert_eq!(
        width("[Y,1024-1024]"),
        Width {
            min: MAX_WIDTH,
            max: Some(MAX_WIDTH)
        }
    );

    // The last comma starts the width; earlier ones are grouping separators.
    let grouped = marker("[Y#,##0,5]");
    assert_eq!(grouped.width(), Some(Width { min: 5, max: None }));
    assert!(matches!(
        grouped.presentation(),
        Presentation::Digits(pattern) if pattern.separator_count() == 1
    ));
}

#[test]
fn invalid_pictures() {
    for picture in [
        "[Y",
        "Y]",
        "[]",
        "[ ]",
        "[Q]",
        "[Y[M]]",
        "[Y,]",
        "[Y,0]",
        "[Y,3-2]",
        "[Y,a-b]",
        "[Y,+2]",
        "[PI]",
        "[Dn]",
        "[fI]",
        "[YZ]",
        "[CI]",
        "[z01:01:01]",
        "[zZ]",
        "[Y0#]",
        "[Yx]",
        "[Do(-e]",
        "[Y,1025]",
        "[Y,2-1025]",
        "[Y,18446744073709551615]",
        "[Y,99999999999999999999]",
    ] {
        assert_invalid(picture);
    }
}

#[test]
fn markers_iterate_in_order() {
    let picture = compile("[D]/[M]/[Y]").unwrap();
    let components: vec::Vec<Component> = picture.markers().map(Marker::component).collect();
    assert_eq!(
        components,
        vec![Component::Day, Component::Month, Component::Year]
    );
}
