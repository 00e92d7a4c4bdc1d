use common::config::ClientConfig;
use common::download::{DownloadFile, FileSaver};
use common::error::{ClientError, ErrorKind};
use common::model::portfolio::PortfolioInput;
use common::model::resume::ResumeRequest;
use common::render::resume::render_resume;
use common::render::Interpolation;
use common::requests::{CoverLetterReply, GenerateResumeReply};
use common::session::Session;
use std::cell::RefCell;

/// Records saved files instead of touching a browser.
#[derive(Default)]
struct RecordingSaver {
    saved: RefCell<Vec<DownloadFile>>,
}

impl FileSaver for RecordingSaver {
    fn save(&self, file: &DownloadFile) -> Result<(), ClientError> {
        self.saved.borrow_mut().push(file.clone());
        Ok(())
    }
}

#[test]
fn resume_reply_renders_two_skill_tags_and_header() {
    let request = ResumeRequest {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "555-0100".to_string(),
        skills: "Go, Python".to_string(),
        ..ResumeRequest::default()
    };
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["skills"], "Go, Python");

    let reply = r#"{"success":true,"resume":{"skills":["Go","Python"]},"personalInfo":{"name":"Jane Doe","email":"jane@x.com","phone":"555-0100"}}"#;
    let snapshot = GenerateResumeReply::from_json(reply)
        .and_then(GenerateResumeReply::into_result)
        .unwrap();

    let mut session = Session::new();
    session.store_resume(snapshot);
    let cached = session.pdf_request().unwrap();
    let html = render_resume(
        &cached.resume_data,
        &cached.personal_info,
        Interpolation::Escaped,
    );

    assert_eq!(html.matches(r#"class="skill-tag""#).count(), 2);
    assert!(html.contains(r#"<span class="skill-tag">Go</span>"#));
    assert!(html.contains(r#"<span class="skill-tag">Python</span>"#));
    assert!(html.contains("Jane Doe"));
}

#[test]
fn portfolio_with_one_project_has_one_card() {
    let input = PortfolioInput {
        name: "Jane Doe".to_string(),
        bio: "Engineer".to_string(),
        skills: "Go".to_string(),
        projects: r#"[{"title":"T","description":"D","image":"i.png","tech":["X"],"link":"http://e.com"}]"#
            .to_string(),
    };

    let mut session = Session::new();
    let html = session
        .generate_portfolio(&input, Interpolation::Escaped)
        .unwrap()
        .to_string();

    assert_eq!(html.matches(r#"class="project-card""#).count(), 1);
    assert!(html.contains(r#"<span class="tech-tag">X</span>"#));
    assert!(html.contains(r#"href="http://e.com""#));

    let saver = RecordingSaver::default();
    let file = session.portfolio_file(&ClientConfig::default()).unwrap();
    saver.save(&file).unwrap();
    let saved = saver.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].file_name, "portfolio.html");
    assert_eq!(saved[0].mime, "text/html");
}

#[test]
fn cover_letter_envelope_passes_text_through_verbatim() {
    let text = CoverLetterReply::from_json(r#"{"success":true,"coverLetter":"Dear Hiring Manager..."}"#)
        .and_then(CoverLetterReply::into_result)
        .unwrap();
    assert_eq!(text, "Dear Hiring Manager...");

    let text = CoverLetterReply::from_json(r#"{"success":true,"coverLetter":"I am <b>bold</b>"}"#)
        .and_then(CoverLetterReply::into_result)
        .unwrap();
    assert_eq!(text, "I am <b>bold</b>");
}

#[test]
fn downloads_before_generation_are_validation_errors() {
    let session = Session::new();
    let saver = RecordingSaver::default();

    let pdf = session.pdf_request().unwrap_err();
    assert_eq!(pdf.kind(), ErrorKind::Validation);

    let portfolio = session.portfolio_file(&ClientConfig::default()).unwrap_err();
    assert_eq!(portfolio.kind(), ErrorKind::Validation);
    assert!(saver.saved.borrow().is_empty());
}

#[test]
fn missing_portfolio_fields_never_reach_the_parser() {
    let mut session = Session::new();
    let input = PortfolioInput {
        name: "Jane".to_string(),
        ..PortfolioInput::default()
    };
    let err = session
        .generate_portfolio(&input, Interpolation::Escaped)
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingFields));
    assert!(session.portfolio().is_none());
}
