use felines::{
    run_session, Breed, Catalog, FelineError, PageInfo, Session, SessionSettings, Tab,
    TerminalPresenter,
};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

fn three_fact_catalog() -> Catalog {
    Catalog {
        page: PageInfo::default(),
        facts: vec!["f0".to_string(), "f1".to_string(), "f2".to_string()],
        breeds: vec![
            Breed::new("Siamese", "Known for their distinctive coloring and vocal nature."),
            Breed::new("Persian", "Recognized for their long fur and flat faces."),
        ],
    }
}

fn every(seconds: u64) -> SessionSettings {
    SessionSettings {
        auto_advance: Some(Duration::from_secs(seconds)),
    }
}

#[tokio::test]
async fn test_fact_and_breed_scenarios() {
    let (mut session, _events) =
        Session::start(three_fact_catalog(), SessionSettings::manual()).unwrap();

    session.advance();
    session.advance();
    assert_eq!(session.current_fact(), "f2");
    session.advance();
    assert_eq!(session.current_fact(), "f0");

    assert!(session.toggle_like("Siamese").unwrap());
    assert!(session.is_liked("Siamese").unwrap());
    assert!(!session.is_liked("Persian").unwrap());
    assert!(!session.toggle_like("Siamese").unwrap());
    assert!(!session.is_liked("Siamese").unwrap());

    let err = session.toggle_like("Sphynx").unwrap_err();
    assert!(matches!(err, FelineError::UnknownBreed { .. }));
    assert!(session.breeds().iter().all(|b| !b.liked));
}

#[tokio::test(start_paused = true)]
async fn test_timer_and_manual_advances_share_one_cycle() {
    let (session, mut events) = Session::start(three_fact_catalog(), every(10)).unwrap();
    assert!(session.auto_advance_running());

    // tick -> 1, manual -> 2, tick -> 0
    events.recv().await.unwrap();
    assert_eq!(session.fact_index(), 1);
    assert_eq!(session.advance(), "f2");
    events.recv().await.unwrap();
    assert_eq!(session.current_fact(), "f0");

    let summary = session.close().await;
    assert_eq!(summary.fact_index, 0);
    assert!(events.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_cancels_timer() {
    let (session, mut events) = Session::start(three_fact_catalog(), every(1)).unwrap();
    drop(session);

    tokio::time::advance(Duration::from_secs(5)).await;
    assert!(events.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_timer_redraws_only_on_facts_tab() {
    let (session, events) = Session::start(three_fact_catalog(), every(10)).unwrap();
    let (mut writer, reader) = tokio::io::duplex(256);

    let driver = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(15)).await;
        writer.write_all(b"breeds\n").await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        writer.write_all(b"quit\n").await.unwrap();
    });

    let mut presenter = TerminalPresenter::new(Vec::new());
    let summary = run_session(
        session,
        events,
        tokio::io::BufReader::new(reader),
        &mut presenter,
    )
    .await
    .unwrap();
    driver.await.unwrap();

    let out = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(out.contains("[1/3] f0"));
    assert!(out.contains("[2/3] f1"));
    // The second tick happened while the breeds tab was showing.
    assert!(!out.contains("[3/3] f2"));
    assert_eq!(summary.fact_index, 2);
}

#[tokio::test]
async fn test_builtin_page_walkthrough() {
    let (session, events) = Session::start(Catalog::builtin(), SessionSettings::manual()).unwrap();
    let script = "n\nn\nlike 1\nlike Scottish Fold\nbreeds\nquit\nnext\n";

    let mut presenter = TerminalPresenter::new(Vec::new());
    let summary = run_session(session, events, script.as_bytes(), &mut presenter)
        .await
        .unwrap();

    assert_eq!(summary.fact_index, 2);
    assert_eq!(
        summary.liked,
        vec!["Siamese".to_string(), "Scottish Fold".to_string()]
    );
    let out = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(out.contains("1. ♥ Siamese"));
    assert!(out.contains("2. ♡ Maine Coon"));
    assert!(out.contains("5. ♥ Scottish Fold"));
    assert!(!out.contains("[4/6]"));
}

#[tokio::test]
async fn test_session_tab_defaults_to_facts() {
    let (mut session, _events) =
        Session::start(Catalog::builtin(), SessionSettings::manual()).unwrap();
    assert_eq!(session.active_tab(), Tab::Facts);
    session.select_tab(Tab::Breeds);
    assert_eq!(session.snapshot().active_tab, Tab::Breeds);
}
