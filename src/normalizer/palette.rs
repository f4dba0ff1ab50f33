use crate::constants::*;
use crate::model::Entity;
use crate::model::EntityType;
use crate::model::TransferKind;
use crate::risk::RiskTier;
use crate::risk::classify;

/// Node fill: high risk beats type, type beats tier.
pub fn node_color(entity: &Entity) -> &'static str {
    let tier = entity.risk_score.map(classify);

    if tier == Some(RiskTier::High) {
        return NODE_COLOR_ALERT;
    }

    match entity.entity_type {
        EntityType::Exchange => NODE_COLOR_EXCHANGE,
        EntityType::Bridge => NODE_COLOR_BRIDGE,
        EntityType::Contract => NODE_COLOR_CONTRACT,
        EntityType::Token => NODE_COLOR_TOKEN,
        EntityType::Eoa => match tier {
            Some(RiskTier::Medium) => NODE_COLOR_WARNING,
            _ => NODE_COLOR_NEUTRAL,
        },
    }
}

pub fn edge_color(kind: TransferKind) -> &'static str {
    match kind {
        TransferKind::Transfer => EDGE_COLOR_TRANSFER,
        TransferKind::Swap => EDGE_COLOR_SWAP,
        TransferKind::Bridge => EDGE_COLOR_BRIDGE,
        TransferKind::Mint => EDGE_COLOR_MINT,
        TransferKind::Burn => EDGE_COLOR_BURN,
    }
}

/// Stroke width grows with the transaction count up to a cap.
pub fn edge_width(tx_count: u32) -> f64 {
    (f64::from(tx_count.max(1)) * EDGE_WIDTH_PER_TX).min(EDGE_WIDTH_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(
        entity_type: EntityType,
        score: Option<i64>,
    ) -> Entity {
        let entity = Entity::new("n", "0x00", "ethereum", entity_type);
        match score {
            Some(score) => entity.with_risk_score(score),
            None => entity,
        }
    }

    #[test]
    fn high_risk_overrides_type() {
        assert_eq!(node_color(&entity(EntityType::Exchange, Some(85))), NODE_COLOR_ALERT);
        assert_eq!(node_color(&entity(EntityType::Token, Some(70))), NODE_COLOR_ALERT);
    }

    #[test]
    fn type_colors_apply_below_high_risk() {
        assert_eq!(node_color(&entity(EntityType::Exchange, Some(69))), NODE_COLOR_EXCHANGE);
        assert_eq!(node_color(&entity(EntityType::Bridge, None)), NODE_COLOR_BRIDGE);
        assert_eq!(node_color(&entity(EntityType::Contract, Some(45))), NODE_COLOR_CONTRACT);
        assert_eq!(node_color(&entity(EntityType::Token, Some(0))), NODE_COLOR_TOKEN);
    }

    #[test]
    fn wallets_fall_back_to_tier() {
        assert_eq!(node_color(&entity(EntityType::Eoa, Some(55))), NODE_COLOR_WARNING);
        assert_eq!(node_color(&entity(EntityType::Eoa, Some(12))), NODE_COLOR_NEUTRAL);
        assert_eq!(node_color(&entity(EntityType::Eoa, None)), NODE_COLOR_NEUTRAL);
    }

    #[test]
    fn edge_color_ignores_risk() {
        assert_eq!(edge_color(TransferKind::Transfer), EDGE_COLOR_TRANSFER);
        assert_eq!(edge_color(TransferKind::Swap), EDGE_COLOR_SWAP);
        assert_eq!(edge_color(TransferKind::Bridge), EDGE_COLOR_BRIDGE);
        assert_eq!(edge_color(TransferKind::Mint), EDGE_COLOR_MINT);
        assert_eq!(edge_color(TransferKind::Burn), EDGE_COLOR_BURN);
    }

    #[test]
    fn edge_width_saturates() {
        assert_eq!(edge_width(0), 1.5);
        assert_eq!(edge_width(1), 1.5);
        assert_eq!(edge_width(3), 4.5);
        assert_eq!(edge_width(4), 5.0);
        assert_eq!(edge_width(10), 5.0);
    }
}
