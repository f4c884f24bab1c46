//! Fetch, evaluate and edit against an in-memory store

mod common;

use std::sync::Arc;

use aquaguard_core::time::FixedTime;
use aquaguard_core::{Channel, HealthTier, Parameter, Status, ThresholdError, TrendDirection};
use aquaguard_monitor::{
    DataSourceError, InMemoryDataSource, SaveError, TankDataSource, TankMonitor, ThresholdEditor,
};
use common::*;

#[tokio::test]
async fn test_healthy_tank_snapshot() {
    let monitor = TankMonitor::new(two_tanks().await).with_clock(FixedTime::new(START));
    let snapshot = monitor.refresh(1).await.unwrap().unwrap();

    assert_eq!(snapshot.evaluated_at, START);
    assert_eq!(snapshot.report.health.percent, 100.0);
    assert_eq!(snapshot.report.health.tier, HealthTier::Happy);
    assert!(snapshot.report.alerts.is_empty());

    let temperature = snapshot.report.evaluation(Parameter::Temperature).unwrap();
    assert_eq!(temperature.trend.direction, TrendDirection::Rising);
    assert_eq!(temperature.trend.change_percent, 5.0);
}

#[tokio::test]
async fn test_acidic_tank_raises_alerts() {
    let monitor = TankMonitor::new(two_tanks().await);
    let snapshot = monitor.refresh(2).await.unwrap().unwrap();
    let report = &snapshot.report;

    assert_eq!(report.health.percent, 32.5);
    assert_eq!(report.health.tier, HealthTier::Concerned);
    assert_eq!(
        report.evaluation(Parameter::Ph).map(|e| e.status),
        Some(Status::Critical)
    );
    assert_eq!(report.alerts.len(), 2);
    assert_eq!(report.alerts.for_channel(Channel::Email).count(), 2);
}

#[tokio::test]
async fn test_saved_thresholds_change_alerts() {
    let source = two_tanks().await;
    let mut editor = ThresholdEditor::load(&source, 2).await.unwrap();
    editor.draft_mut().email_alerts_enabled = false;
    let ph = editor.draft_mut().get_mut(Parameter::Ph);
    ph.min = "5.5".into();
    ph.max = "7.5".into();
    editor.save(&source).await.unwrap();

    let monitor = TankMonitor::new(source);
    let report = monitor.refresh(2).await.unwrap().unwrap().report;

    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.alerts.for_channel(Channel::Email).count(), 0);
    assert_eq!(report.alerts.for_channel(Channel::InApp).count(), 1);
}

#[tokio::test]
async fn test_response_for_previous_tank_is_dropped() {
    let source = GatedSource::new(two_tanks().await, 1);
    let monitor = Arc::new(TankMonitor::new(source));

    let slow = {
        let monitor = Arc::clone(&monitor);
        tokio::spawn(async move { monitor.refresh(1).await })
    };
    monitor.source().started.notified().await;

    let current = monitor.refresh(2).await.unwrap().unwrap();
    assert_eq!(current.tank, 2);

    monitor.source().release.notify_one();
    assert_eq!(slow.await.unwrap(), Ok(None));
}

#[tokio::test]
async fn test_stale_failure_is_dropped_too() {
    let source = GatedSource::new(InMemoryDataSource::new(), 7);
    let monitor = Arc::new(TankMonitor::new(source));

    let slow = {
        let monitor = Arc::clone(&monitor);
        tokio::spawn(async move { monitor.refresh(7).await })
    };
    monitor.source().started.notified().await;
    monitor.cancel_pending();
    monitor.source().release.notify_one();

    assert_eq!(slow.await.unwrap(), Ok(None));
}

#[tokio::test]
async fn test_invalid_draft_is_not_saved() {
    let source = two_tanks().await;
    let mut editor = ThresholdEditor::load(&source, 1).await.unwrap();
    editor.draft_mut().get_mut(Parameter::Ammonia).max = "9".into();

    let error = editor.save(&source).await.unwrap_err();
    assert_eq!(
        error.field_errors().and_then(|e| e.get(Parameter::Ammonia)),
        Some(&ThresholdError::MaxOutOfBounds { lo: 0.0, hi: 5.0 })
    );
    assert_eq!(source.thresholds(1).await, Ok(None));
    assert!(editor.is_dirty());
}

#[tokio::test]
async fn test_backend_failure_keeps_saved_state() {
    let source = two_tanks().await;
    let mut editor = ThresholdEditor::load(&source, 1).await.unwrap();
    let before = editor.saved().clone();
    editor.draft_mut().in_app_alerts_enabled = false;

    source.fail_saves(true);
    let error = editor.save(&source).await.unwrap_err();
    assert!(matches!(error, SaveError::Backend(DataSourceError::Backend(_))));
    assert_eq!(error.to_string(), "Failed to save thresholds. Please try again.");
    assert_eq!(editor.saved(), &before);
    assert!(editor.is_dirty());

    source.fail_saves(false);
    let saved = editor.save(&source).await.unwrap().clone();
    assert!(!saved.in_app_alerts_enabled);
    assert!(!editor.is_dirty());
    assert_eq!(source.thresholds(1).await, Ok(Some(saved)));
}

#[tokio::test]
async fn test_reset_to_defaults_then_save() {
    let source = two_tanks().await;
    let mut editor = ThresholdEditor::load(&source, 2).await.unwrap();
    editor.draft_mut().get_mut(Parameter::Turbidity).max = "10".into();
    editor.save(&source).await.unwrap();

    editor.reset_to_defaults();
    assert!(editor.is_dirty());
    editor.save(&source).await.unwrap();

    assert_eq!(
        source.thresholds(2).await.unwrap().map(|c| c.turbidity.max),
        Some(5.0)
    );
}
