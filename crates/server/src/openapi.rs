use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct ErrorsDoc { pub errors: Vec<String> }

#[derive(ToSchema)]
pub struct RestaurantDoc { pub id: i32, pub name: String, pub address: String }

#[derive(ToSchema)]
pub struct RestaurantPizzaSummaryDoc { pub id: i32, pub price: f64, pub restaurant_id: i32, pub pizza_id: i32 }

#[derive(ToSchema)]
pub struct RestaurantDetailDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaSummaryDoc>,
}

#[derive(ToSchema)]
pub struct PizzaDoc { pub id: i32, pub name: String, pub ingredients: String }

#[derive(ToSchema)]
pub struct CreateRestaurantPizzaDoc {
    /// Between 1 and 30 inclusive.
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
}

#[derive(ToSchema)]
pub struct RestaurantPizzaDoc {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantDoc,
    pub pizza: PizzaDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::get,
        crate::routes::restaurants::delete,
        crate::routes::pizzas::list,
        crate::routes::restaurant_pizzas::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ErrorsDoc,
            RestaurantDoc,
            RestaurantPizzaSummaryDoc,
            RestaurantDetailDoc,
            PizzaDoc,
            CreateRestaurantPizzaDoc,
            RestaurantPizzaDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants"),
        (name = "pizzas"),
        (name = "restaurant_pizzas")
    )
)]
pub struct ApiDoc;
