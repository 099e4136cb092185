use crate::{
    model::order::{OrderStatus, PaymentType},
    server::{
        data::menu::MenuRepository,
        error::{order::OrderError, AppError},
        model::{
            menu::UpdateMenuParam,
            order::{CartGroupParam, CartItemParam, PlaceOrderParam},
        },
        service::order::OrderService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod update_status;

/// Burger priced 8000 with a single-choice "Size" group and a
/// "Toppings" group allowing two choices.
struct BurgerMenu {
    restaurant: entity::restaurant::Model,
    burger: entity::menu::Model,
    size: entity::option_group::Model,
    large: entity::menu_option::Model,
    regular: entity::menu_option::Model,
    toppings: entity::option_group::Model,
    cheese: entity::menu_option::Model,
    bacon: entity::menu_option::Model,
    egg: entity::menu_option::Model,
}

async fn burger_menu(db: &sea_orm::DatabaseConnection) -> Result<BurgerMenu, sea_orm::DbErr> {
    let restaurant = factory::create_restaurant(db).await?;
    let category = factory::create_menu_category(db, restaurant.id).await?;
    let burger = factory::menu::MenuFactory::new(db, category.id)
        .name("Burger")
        .price(8000)
        .build()
        .await?;

    let size = factory::option_group::OptionGroupFactory::new(db, burger.id)
        .name("Size")
        .max_count(1)
        .build()
        .await?;
    let regular = factory::menu_option::MenuOptionFactory::new(db, size.id)
        .name("Regular")
        .price(0)
        .build()
        .await?;
    let large = factory::menu_option::MenuOptionFactory::new(db, size.id)
        .name("Large")
        .price(1500)
        .build()
        .await?;

    let toppings = factory::option_group::OptionGroupFactory::new(db, burger.id)
        .name("Toppings")
        .max_count(2)
        .build()
        .await?;
    let cheese = factory::menu_option::MenuOptionFactory::new(db, toppings.id)
        .name("Cheese")
        .price(500)
        .build()
        .await?;
    let bacon = factory::menu_option::MenuOptionFactory::new(db, toppings.id)
        .name("Bacon")
        .price(1000)
        .build()
        .await?;
    let egg = factory::menu_option::MenuOptionFactory::new(db, toppings.id)
        .name("Egg")
        .price(700)
        .build()
        .await?;

    Ok(BurgerMenu {
        restaurant,
        burger,
        size,
        large,
        regular,
        toppings,
        cheese,
        bacon,
        egg,
    })
}

fn item(menu_id: i32, quantity: i32, groups: Vec<(i32, Vec<i32>)>) -> CartItemParam {
    CartItemParam {
        menu_id,
        quantity,
        groups: groups
            .into_iter()
            .map(|(group_id, option_ids)| CartGroupParam {
                group_id,
                option_ids,
            })
            .collect(),
    }
}

fn cart(restaurant_id: i32, discount_amount: i64, items: Vec<CartItemParam>) -> PlaceOrderParam {
    PlaceOrderParam {
        restaurant_id,
        payment_type: PaymentType::Online,
        discount_amount,
        items,
    }
}

fn order_err(result: Result<impl std::fmt::Debug, AppError>) -> OrderError {
    match result {
        Err(AppError::OrderErr(err)) => err,
        other => panic!("Expected OrderError, got: {:?}", other),
    }
}
