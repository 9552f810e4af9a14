mod common;

use api::gql::build_schema;
use api::{AppConfig, AppState};
use async_graphql::Variables;
use common::*;
use serde_json::{json, Value};

const CALCULATE: &str = r#"
    query Calculate($rank: String!, $maxParticipants: Int, $prizePool: Int) {
        calculateTournamentRewards(
            position: "1"
            rank: $rank
            maxParticipants: $maxParticipants
            prizePool: $prizePool
        ) {
            totalPrize
            showPrizes
            positions {
                position
                name
                eloPoints
                spaPoints
                cashPrize
                items
                isVisible
            }
            specialAwards {
                id
                name
                cashPrize
            }
        }
    }
"#;

async fn calculate(variables: Value) -> Value {
    let schema = build_schema(lazy_state());
    let response =
        execute_graphql(&schema, CALCULATE, Some(Variables::from_json(variables))).await;

    assert!(
        response.errors.is_empty(),
        "Calculation should succeed: {:?}",
        response.errors
    );

    response.data.into_json().unwrap()["calculateTournamentRewards"].clone()
}

fn find_position(rewards: &Value, position: i64) -> Option<&Value> {
    rewards["positions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["position"] == position)
}

#[tokio::test]
async fn test_calculate_sixteen_player_ten_million_pool() {
    let rewards = calculate(json!({
        "rank": "G",
        "maxParticipants": 16,
        "prizePool": 10_000_000
    }))
    .await;

    assert_eq!(rewards["totalPrize"], 10_000_000);
    assert_eq!(rewards["showPrizes"], true);
    assert_eq!(rewards["positions"].as_array().unwrap().len(), 6);

    let champion = find_position(&rewards, 1).unwrap();
    assert_eq!(champion["cashPrize"], 5_000_000);
    assert_eq!(champion["name"], "Champion");
    assert_eq!(
        champion["eloPoints"],
        infra::rewards::elo_points(infra::rewards::PositionTier::Champion, "G")
    );
    assert_eq!(
        champion["spaPoints"],
        infra::rewards::spa_points(infra::rewards::PositionTier::Champion, "G")
    );
    assert_eq!(champion["items"], json!(["Champion Cup", "Gold Medal"]));

    assert_eq!(find_position(&rewards, 2).unwrap()["cashPrize"], 3_000_000);
    assert_eq!(find_position(&rewards, 3).unwrap()["cashPrize"], 1_500_000);
    assert_eq!(find_position(&rewards, 4).unwrap()["cashPrize"], 500_000);
    assert_eq!(find_position(&rewards, 8).unwrap()["cashPrize"], 0);

    let awards = rewards["specialAwards"].as_array().unwrap();
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0]["name"], "Fair Play");
    assert_eq!(awards[0]["cashPrize"], 0);
}

#[tokio::test]
async fn test_calculate_small_field_without_pool() {
    let rewards = calculate(json!({
        "rank": "E",
        "maxParticipants": 4,
        "prizePool": 0
    }))
    .await;

    let positions = rewards["positions"].as_array().unwrap();
    let numbers: Vec<i64> = positions
        .iter()
        .map(|p| p["position"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(positions[3]["name"], "Participation");
    assert!(positions.iter().all(|p| p["cashPrize"] == 0));
    assert_eq!(rewards["showPrizes"], false);
    assert!(rewards["specialAwards"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_calculate_uses_configured_default_field_size() {
    let state = lazy_state();
    let state = AppState::new(
        state.db.clone(),
        AppConfig {
            default_max_participants: 8,
            ..AppConfig::default()
        },
    );
    let schema = build_schema(state);

    let response = execute_graphql(
        &schema,
        r#"{ calculateTournamentRewards(rank: "H") { positions { position name } } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let names: Vec<&str> = data["calculateTournamentRewards"]["positions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Champion", "Runner-up", "Third Place", "Top 4", "Participation"]);
}

#[tokio::test]
async fn test_calculate_defaults_to_sixteen_players() {
    let rewards = calculate(json!({ "rank": "G", "prizePool": 1_000 })).await;

    let numbers: Vec<i64> = rewards["positions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["position"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 8, 16]);
}

#[tokio::test]
async fn test_calculate_unknown_rank_scores_zero() {
    let rewards = calculate(json!({ "rank": "Z", "prizePool": 100 })).await;

    for position in rewards["positions"].as_array().unwrap() {
        assert_eq!(position["eloPoints"], 0);
        assert_eq!(position["spaPoints"], 0);
    }
    assert_eq!(find_position(&rewards, 1).unwrap()["cashPrize"], 50);
}

#[tokio::test]
async fn test_validate_rewards() {
    let schema = build_schema(lazy_state());
    let query = r#"
        query Validate($rewards: JSON) {
            validateRewards(rewards: $rewards)
        }
    "#;

    let cases = [
        (json!({ "rewards": null }), false),
        (json!({ "rewards": [] }), false),
        (json!({ "rewards": { "positions": "not a list" } }), false),
        (
            json!({ "rewards": {
                "totalPrize": 0, "showPrizes": false, "positions": [], "specialAwards": []
            } }),
            true,
        ),
    ];

    for (variables, expected) in cases {
        let response =
            execute_graphql(&schema, query, Some(Variables::from_json(variables.clone()))).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["validateRewards"], expected, "input {variables}");
    }
}

#[tokio::test]
async fn test_normalize_rewards_repairs_documents() {
    let schema = build_schema(lazy_state());
    let query = r#"
        query Normalize($rewards: JSON) {
            normalizeRewards(rewards: $rewards) {
                totalPrize
                showPrizes
                positions { position name cashPrize isVisible }
                specialAwards { id name }
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "rewards": {
            "totalPrize": "2500",
            "positions": [{ "cashPrize": 1000 }, "garbage"],
            "specialAwards": [{ "name": "MVP" }]
        }
    }));

    let response = execute_graphql(&schema, query, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let rewards = &data["normalizeRewards"];
    assert_eq!(rewards["totalPrize"], 2500);
    assert_eq!(rewards["showPrizes"], true);
    assert_eq!(rewards["positions"][0]["name"], "Position 1");
    assert_eq!(rewards["positions"][0]["cashPrize"], 1000);
    assert_eq!(rewards["positions"][1]["position"], 2);
    assert_eq!(rewards["positions"][1]["isVisible"], true);
    assert!(rewards["specialAwards"][0]["id"]
        .as_str()
        .unwrap()
        .starts_with("award_"));
}

#[tokio::test]
async fn test_normalize_null_and_empty_rewards_agree() {
    let schema = build_schema(lazy_state());
    let selection = "{ totalPrize showPrizes positions { position } specialAwards { id } }";

    let normalized = execute_graphql(
        &schema,
        &format!("{{ normalizeRewards(rewards: null) {selection} }}"),
        None,
    )
    .await;
    let empty = execute_graphql(&schema, &format!("{{ emptyRewards {selection} }}"), None).await;
    assert!(normalized.errors.is_empty(), "{:?}", normalized.errors);
    assert!(empty.errors.is_empty(), "{:?}", empty.errors);

    let normalized = normalized.data.into_json().unwrap();
    let empty = empty.data.into_json().unwrap();
    assert_eq!(normalized["normalizeRewards"], empty["emptyRewards"]);
    assert_eq!(
        empty["emptyRewards"],
        json!({ "totalPrize": 0, "showPrizes": false, "positions": [], "specialAwards": [] })
    );
}

#[tokio::test]
async fn test_prize_distribution_reports_remainder() {
    let schema = build_schema(lazy_state());
    let response = execute_graphql(
        &schema,
        r#"{ prizeDistribution(totalPrize: 10) {
            champion runnerUp thirdPlace fourthPlace distributed remainder
        } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(
        data["prizeDistribution"],
        json!({
            "champion": 5, "runnerUp": 3, "thirdPlace": 1, "fourthPlace": 0,
            "distributed": 9, "remainder": 1
        })
    );
}

#[tokio::test]
async fn test_rank_reward_table_is_ordered() {
    let schema = build_schema(lazy_state());
    let response = execute_graphql(
        &schema,
        r#"{ rankRewardTable(rank: "F+") { tier eloPoints spaPoints } }"#,
        None,
    )
    .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let rows = data["rankRewardTable"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["tier"], "CHAMPION");
    assert_eq!(rows[5]["tier"], "PARTICIPATION");
    for pair in rows.windows(2) {
        assert!(pair[0]["eloPoints"].as_i64() >= pair[1]["eloPoints"].as_i64());
        assert!(pair[0]["spaPoints"].as_i64() >= pair[1]["spaPoints"].as_i64());
    }
}

#[tokio::test]
async fn test_invalid_tournament_id_is_rejected() {
    let schema = build_schema(lazy_state());
    let response = execute_graphql(
        &schema,
        r#"{ tournamentRewards(tournamentId: "not-a-uuid") { id } }"#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0]
        .message
        .starts_with("Invalid tournament ID"));
}
