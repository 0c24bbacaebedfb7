use crate::id::BlockId;
use serde::Serialize;

/// Smelt time at a 1.0 speed multiplier, in ticks.
pub const BASE_MAX_SMELT_TIME: u32 = 200;

/// Fuel capacity assumed when a definition does not specify one.
pub const DEFAULT_FUEL_CAPACITY: u32 = 48_000;

/// One forge tier: performance parameters plus the blocks it may be built
/// from. Immutable once constructed; configuration changes replace the value
/// wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForgeDefinition {
    tier: u32,
    speed_multiplier: f32,
    fuel_capacity: u32,
    max_smelt_time: u32,
    material: BlockId,
    additional_materials: Vec<BlockId>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("forge tier must be at least 1")]
    ZeroTier,
    /// Zero, negative, or non-finite multipliers make the derived smelt time
    /// undefined.
    #[error("speed multiplier must be positive and finite, got {0}")]
    DegenerateSpeed(f32),
}

impl ForgeDefinition {
    /// Validates the inputs and computes the derived smelt time. No
    /// `ForgeDefinition` exists whose fields are inconsistent with each
    /// other.
    pub fn new(
        tier: u32,
        speed_multiplier: f32,
        fuel_capacity: u32,
        material: BlockId,
        additional_materials: Vec<BlockId>,
    ) -> Result<Self, DefinitionError> {
        if tier == 0 {
            return Err(DefinitionError::ZeroTier);
        }
        if !(speed_multiplier.is_finite() && speed_multiplier > 0.0) {
            return Err(DefinitionError::DegenerateSpeed(speed_multiplier));
        }
        // Truncation toward zero, never rounding. `as` saturates for
        // out-of-range quotients, which only arises for sub-normal
        // multipliers.
        let max_smelt_time = (BASE_MAX_SMELT_TIME as f32 / speed_multiplier) as u32;
        Ok(Self {
            tier,
            speed_multiplier,
            fuel_capacity,
            max_smelt_time,
            material,
            additional_materials,
        })
    }

    pub fn tier(&self) -> u32 {
        self.tier
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn fuel_capacity(&self) -> u32 {
        self.fuel_capacity
    }

    /// Always `trunc(200 / speed_multiplier)`; never taken from input.
    pub fn max_smelt_time(&self) -> u32 {
        self.max_smelt_time
    }

    pub fn material(&self) -> BlockId {
        self.material
    }

    /// Insertion order of the source document, duplicates preserved.
    pub fn additional_materials(&self) -> &[BlockId] {
        &self.additional_materials
    }

    /// Whether `block` may appear in this forge's multiblock structure.
    pub fn is_material_valid(&self, block: BlockId) -> bool {
        block == self.material || self.additional_materials.contains(&block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(speed: f32) -> ForgeDefinition {
        ForgeDefinition::new(1, speed, DEFAULT_FUEL_CAPACITY, BlockId(0), vec![]).unwrap()
    }

    #[test]
    fn unit_speed_keeps_base_time() {
        assert_eq!(def(1.0).max_smelt_time(), BASE_MAX_SMELT_TIME);
    }

    #[test]
    fn double_speed_halves_time() {
        assert_eq!(def(2.0).max_smelt_time(), 100);
    }

    #[test]
    fn fractional_result_truncates_toward_zero() {
        // 200 / 3.0 = 66.66...
        assert_eq!(def(3.0).max_smelt_time(), 66);
        // 200 / 0.3 = 666.66...
        assert_eq!(def(0.3).max_smelt_time(), 666);
    }

    #[test]
    fn slow_forge_exceeds_base_time() {
        assert_eq!(def(0.5).max_smelt_time(), 400);
    }

    #[test]
    fn zero_speed_rejected() {
        let err =
            ForgeDefinition::new(1, 0.0, DEFAULT_FUEL_CAPACITY, BlockId(0), vec![]).unwrap_err();
        assert!(matches!(err, DefinitionError::DegenerateSpeed(_)));
    }

    #[test]
    fn negative_speed_rejected() {
        let err =
            ForgeDefinition::new(1, -1.5, DEFAULT_FUEL_CAPACITY, BlockId(0), vec![]).unwrap_err();
        assert!(matches!(err, DefinitionError::DegenerateSpeed(_)));
    }

    #[test]
    fn non_finite_speed_rejected() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let result = ForgeDefinition::new(1, bad, DEFAULT_FUEL_CAPACITY, BlockId(0), vec![]);
            assert!(matches!(result, Err(DefinitionError::DegenerateSpeed(_))));
        }
    }

    #[test]
    fn zero_tier_rejected() {
        let err = ForgeDefinition::new(0, 1.0, 0, BlockId(0), vec![]).unwrap_err();
        assert!(matches!(err, DefinitionError::ZeroTier));
    }

    #[test]
    fn material_validity_covers_primary_and_additional() {
        let d =
            ForgeDefinition::new(2, 1.0, 0, BlockId(3), vec![BlockId(5), BlockId(9)]).unwrap();
        assert!(d.is_material_valid(BlockId(3)));
        assert!(d.is_material_valid(BlockId(5)));
        assert!(d.is_material_valid(BlockId(9)));
        assert!(!d.is_material_valid(BlockId(4)));
    }

    #[test]
    fn additional_materials_preserve_order_and_duplicates() {
        let d = ForgeDefinition::new(
            1,
            1.0,
            0,
            BlockId(0),
            vec![BlockId(2), BlockId(1), BlockId(2)],
        )
        .unwrap();
        assert_eq!(
            d.additional_materials(),
            &[BlockId(2), BlockId(1), BlockId(2)]
        );
    }

    #[test]
    fn identical_inputs_build_identical_values() {
        let a = ForgeDefinition::new(3, 1.7, 96_000, BlockId(1), vec![BlockId(2)]).unwrap();
        let b = ForgeDefinition::new(3, 1.7, 96_000, BlockId(1), vec![BlockId(2)]).unwrap();
        assert_eq!(a, b);
    }
}
