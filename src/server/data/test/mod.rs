mod feature;
mod plan_feature;
mod plan_type;
mod subscription_plan;
