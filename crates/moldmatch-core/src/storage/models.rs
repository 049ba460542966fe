/// Summary of one persisted comparison, without its payload.
#[derive(Debug, Clone)]
pub struct SharedComparison {
    pub share_id: String,
    pub created_at: String,
    pub hydraulic_groups: i64,
    pub electric_groups: i64,
    pub machine_count: i64,
}
