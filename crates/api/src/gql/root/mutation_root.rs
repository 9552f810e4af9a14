use async_graphql::MergedObject;

use crate::gql::domains::rewards::RewardsMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(RewardsMutation);
