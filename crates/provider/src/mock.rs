use async_trait::async_trait;
use mockall::mock;
use slotproxy_core::{errors::SlotResult, models::slot::FlatSlot};

use crate::SlotProvider;

// Mock provider for testing
mock! {
    pub SlotProvider {}

    #[async_trait]
    impl SlotProvider for SlotProvider {
        async fn fetch_available_slots(
            &self,
            days_ahead: u32,
            duration: u32,
        ) -> SlotResult<Vec<FlatSlot>>;
    }
}
