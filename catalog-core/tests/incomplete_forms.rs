mod common;

use catalog_core::{
    ConstraintKind, EpisodeMapper, GameMapper, MovieMapper, SeasonMapper,
    SubmitError, ValidationReport, submit,
};
use catalog_model::Language;
use catalog_model::forms::{DurationForm, EpisodeForm, GameForm, SeasonForm};

use common::{movie_form, registry};

fn rejected<T: std::fmt::Debug>(
    result: Result<T, SubmitError>,
) -> ValidationReport {
    match result {
        Err(SubmitError::Invalid(report)) => report,
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn medium_without_parts_is_rejected_before_mapping() {
    let form = movie_form(vec![DurationForm::default()]);

    let report =
        rejected(submit(&registry(), &MovieMapper::default(), &form));
    for part in ["media[0].hours", "media[0].minutes", "media[0].seconds"] {
        assert!(
            report.has_violation(part, &ConstraintKind::Required),
            "{part}: {report:?}"
        );
    }
    assert_eq!(report.len(), 3);
}

#[test]
fn partly_filled_length_reports_only_missing_parts() {
    let form = movie_form(vec![
        DurationForm::new("1", "0", "0"),
        DurationForm {
            minutes: Some("30".to_string()),
            ..DurationForm::default()
        },
    ]);

    let report =
        rejected(submit(&registry(), &MovieMapper::default(), &form));
    assert_eq!(
        report.paths().collect::<Vec<_>>(),
        vec!["media[1].hours", "media[1].seconds"]
    );
}

#[test]
fn season_without_number_is_rejected_before_mapping() {
    let form = SeasonForm {
        start_year: Some("2000".to_string()),
        end_year: Some("2001".to_string()),
        language: Some(Language::En),
        ..SeasonForm::default()
    };

    let report = rejected(submit(&registry(), &SeasonMapper, &form));
    assert!(report.has_violation("number", &ConstraintKind::Required));
    assert_eq!(report.len(), 1);
}

#[test]
fn episode_without_number_is_rejected_before_mapping() {
    let form = EpisodeForm {
        name: Some("Pilot".to_string()),
        length: Some(DurationForm::new("0", "42", "0")),
        ..EpisodeForm::default()
    };

    let report =
        rejected(submit(&registry(), &EpisodeMapper::default(), &form));
    assert_eq!(report.paths().collect::<Vec<_>>(), vec!["number"]);
}

#[test]
fn game_without_media_count_is_rejected_before_mapping() {
    let form = GameForm {
        name: Some("Factorio".to_string()),
        ..GameForm::default()
    };

    let report = rejected(submit(&registry(), &GameMapper, &form));
    assert!(report.has_violation("mediaCount", &ConstraintKind::Required));
}
