use form_spec::{
    APPLICATION_DATES_SECTION, Definition, Page, PageResponse, PageStatus, Question,
    QuestionResponse, ResponseType, Section, ValidationRules, validate_page,
};

const OPENING: &str = "application-open-date";
const CLOSING: &str = "application-close-date";

fn dates_definition() -> Definition {
    let date_question = |id: &str| Question {
        id: id.into(),
        title: None,
        response_type: ResponseType::Date,
        validation: ValidationRules {
            mandatory: true,
            ..Default::default()
        },
        custom_messages: None,
    };
    Definition {
        sections: vec![Section {
            id: APPLICATION_DATES_SECTION.into(),
            title: "Application dates".into(),
            pages: vec![Page {
                id: "dates".into(),
                title: "Opening and closing dates".into(),
                questions: vec![date_question(OPENING), date_question(CLOSING)],
            }],
        }],
    }
}

fn submission(opening: [&str; 3], closing: [&str; 3]) -> PageResponse {
    PageResponse {
        id: "dates".into(),
        status: Some(PageStatus::Completed),
        questions: vec![
            QuestionResponse::multi(OPENING, opening),
            QuestionResponse::multi(CLOSING, closing),
        ],
    }
}

#[test]
fn valid_dates_pass() {
    let definition = dates_definition();
    let submitted = submission(["1", "1", "2023"], ["31", "12", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert!(result.valid, "unexpected errors: {:?}", result.field_errors);
}

#[test]
fn one_blank_part_names_that_part() {
    let definition = dates_definition();
    let submitted = submission(["", "1", "2023"], ["31", "12", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(result.field_errors[0].message, "Date must include a day");
}

#[test]
fn two_blank_parts_are_joined_with_and() {
    let definition = dates_definition();
    let submitted = submission(["", "", "2023"], ["31", "12", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a day and a month"
    );
}

#[test]
fn an_entirely_blank_date_uses_the_mandatory_message() {
    let definition = dates_definition();
    let submitted = submission(["", "", ""], ["31", "12", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(result.field_errors[0].message, "You must enter a date");
}

#[test]
fn out_of_range_parts_use_the_invalid_message() {
    let definition = dates_definition();

    let submitted = submission(["1", "13", "2023"], ["31", "12", "2023"]);
    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-month"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a valid month"
    );

    let submitted = submission(["1", "1", "23"], ["31", "12", "2023"]);
    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-year"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a valid year"
    );

    let submitted = submission(["0", "0", "20233"], ["31", "12", "2023"]);
    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a valid day, a month and a year"
    );
}

#[test]
fn day_must_fit_the_month() {
    let definition = dates_definition();
    let submitted = submission(["31", "4", "2023"], ["31", "12", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a valid day"
    );
}

#[test]
fn leap_year_boundary() {
    let definition = dates_definition();

    let submitted = submission(["29", "2", "2024"], ["1", "3", "2024"]);
    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert!(result.valid, "29 Feb 2024 is a real date");

    let submitted = submission(["29", "2", "2023"], ["1", "3", "2023"]);
    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-day"));
    assert_eq!(
        result.field_errors[0].message,
        "Date must include a valid day"
    );
}

#[test]
fn closing_before_opening_is_a_single_error_on_the_closing_day() {
    let definition = dates_definition();
    let submitted = submission(["1", "1", "2023"], ["31", "12", "2022"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{CLOSING}-day"));
    assert_eq!(
        result.field_errors[0].message,
        "The closing date must be later than the opening date"
    );
}

#[test]
fn same_day_open_and_close_is_allowed() {
    // Applications open at 00:01 and close at 23:59, so a single-day
    // window is still strictly ordered.
    let definition = dates_definition();
    let submitted = submission(["5", "6", "2023"], ["5", "6", "2023"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert!(result.valid, "unexpected errors: {:?}", result.field_errors);
}

#[test]
fn ordering_check_is_skipped_while_either_date_has_its_own_error() {
    let definition = dates_definition();
    // Closing precedes opening, but the opening month is invalid; only
    // the per-field error is reported.
    let submitted = submission(["1", "13", "2023"], ["31", "12", "2022"]);

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    assert_eq!(result.field_errors.len(), 1);
    assert_eq!(result.field_errors[0].field, format!("{OPENING}-month"));
}

#[test]
fn date_errors_follow_submission_order_with_completed_last() {
    let definition = dates_definition();
    let submitted = PageResponse {
        id: "dates".into(),
        status: None,
        questions: vec![
            QuestionResponse::multi(OPENING, ["", "1", "2023"]),
            QuestionResponse::multi(CLOSING, ["", "", ""]),
        ],
    };

    let result = validate_page(&definition, APPLICATION_DATES_SECTION, &submitted).unwrap();
    let fields: Vec<&str> = result
        .field_errors
        .iter()
        .map(|error| error.field.as_str())
        .collect();
    assert_eq!(
        fields,
        [
            format!("{OPENING}-day"),
            format!("{CLOSING}-day"),
            "completed".to_string()
        ]
    );
}
