use rocket::*;

mod database;
mod pages;

use database::DatabasePool;

#[launch]
async fn rocket() -> _ {
    // Connect to a database
    dotenv::dotenv().ok();
    let database_url =
        dotenv::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_owned());

    let database_pool = database::connect(&database_url)
        .await
        .expect("failed to connect to a database");

    database::init_schema(&database_pool)
        .await
        .expect("failed to initialize the database schema");

    // Build the rocket
    rocket::build()
        .mount(
            "/",
            routes![
                pages::index,
                pages::game,
                database::requests::get_highscores,
                database::requests::add_highscore,
                database::requests::put_highscore,
                database::requests::delete_highscore,
                database::requests::patch_highscore,
            ],
        )
        .manage::<DatabasePool>(database_pool)
}
