//! Create `restaurant_pizzas` join table.
//! Each row prices one pizza at one restaurant; rows die with either parent.
//! Foreign keys are named `fk_<table>_<column>_<referred_table>`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantPizzas::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantPizzas::Id))
                    .col(double(RestaurantPizzas::Price).not_null())
                    .col(integer(RestaurantPizzas::RestaurantId).not_null())
                    .col(integer(RestaurantPizzas::PizzaId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_restaurant_id_restaurants")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_pizzas_pizza_id_pizzas")
                            .from(RestaurantPizzas::Table, RestaurantPizzas::PizzaId)
                            .to(Pizzas::Table, Pizzas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_pizzas_restaurant_id")
                    .table(RestaurantPizzas::Table)
                    .col(RestaurantPizzas::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(RestaurantPizzas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum RestaurantPizzas {
    Table,
    Id,
    Price,
    RestaurantId,
    PizzaId,
}

#[derive(DeriveIden)]
enum Restaurants { Table, Id }

#[derive(DeriveIden)]
enum Pizzas { Table, Id }
