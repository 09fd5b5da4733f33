#![cfg(feature = "serde")]

use warden_patrol::PatrolConfig;

#[test]
fn partial_config_fills_in_defaults() {
    let config: PatrolConfig =
        serde_json::from_str(r#"{"heal_threshold": 0.5, "pursue_priority": 9.0}"#)
            .expect("deserialize patrol config");

    assert_eq!(config.heal_threshold, 0.5);
    assert_eq!(config.pursue_priority, 9.0);
    assert_eq!(config.chase_cost, PatrolConfig::default().chase_cost);
}
