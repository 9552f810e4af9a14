use async_graphql::MergedObject;

use crate::gql::domains::rewards::RewardsQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(RewardsQuery);
