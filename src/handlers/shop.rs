use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::dto::{PointsResponse, RedeemRequest, RedeemResponse, ShopItem};
use crate::error::{AppError, AppResult};
use crate::store::PointsLedger;
use crate::AppState;

const CATALOG: [ShopItem; 8] = [
    ShopItem {
        id: "1",
        title: "Stress Relief Ball",
        description: "Squeeze away tension with this therapeutic stress ball",
        price: 50,
        category: "physical",
    },
    ShopItem {
        id: "2",
        title: "Gym Day Pass",
        description: "One-day access to a local fitness center of your choice",
        price: 150,
        category: "physical",
    },
    ShopItem {
        id: "3",
        title: "Guided Meditation Session",
        description: "Access to premium 30-minute guided meditation",
        price: 75,
        category: "digital",
    },
    ShopItem {
        id: "4",
        title: "Wellness Journal",
        description: "Beautiful journal with prompts for mental well-being",
        price: 120,
        category: "physical",
    },
    ShopItem {
        id: "5",
        title: "Sleep Sound Pack",
        description: "Collection of premium sleep sounds and white noise",
        price: 60,
        category: "digital",
    },
    ShopItem {
        id: "6",
        title: "Therapy Session Discount",
        description: "15% off your next online therapy session",
        price: 200,
        category: "service",
    },
    ShopItem {
        id: "7",
        title: "Aromatherapy Kit",
        description: "Essential oils starter kit for stress relief",
        price: 180,
        category: "physical",
    },
    ShopItem {
        id: "8",
        title: "Mindfulness Course",
        description: "Access to 8-week online mindfulness course",
        price: 250,
        category: "digital",
    },
];

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

pub async fn list_items(Query(query): Query<CatalogQuery>) -> Json<Vec<ShopItem>> {
    let items = match query.category.as_deref() {
        Some(category) if category != "all" => CATALOG
            .iter()
            .filter(|i| i.category == category)
            .copied()
            .collect(),
        _ => CATALOG.to_vec(),
    };
    Json(items)
}

/// Spends points on a catalog item. The ledger rejects a redemption that
/// would take the balance below zero.
pub async fn redeem_item(
    State(state): State<AppState>,
    Json(body): Json<RedeemRequest>,
) -> AppResult<Json<RedeemResponse>> {
    let item = CATALOG
        .iter()
        .find(|i| i.id == body.item_id)
        .ok_or_else(|| AppError::NotFound("Shop item not found".into()))?;

    let reason = format!("redeem: {}", item.title);
    let balance = PointsLedger::new(state.store.clone())
        .apply_delta(-item.price, &reason)
        .await?;

    tracing::info!(item_id = item.id, price = item.price, balance, "Item redeemed");

    Ok(Json(RedeemResponse {
        item_id: body.item_id,
        balance,
    }))
}

pub async fn get_points(State(state): State<AppState>) -> AppResult<Json<PointsResponse>> {
    let ledger = PointsLedger::new(state.store.clone());
    let entries = ledger.entries().await?;
    Ok(Json(PointsResponse {
        balance: PointsLedger::fold(&entries),
        ledger: entries,
    }))
}
