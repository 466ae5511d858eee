use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        string(Movies::ImdbId)
                            .primary_key()
                            .check(Expr::col(Movies::ImdbId).ne("")),
                    )
                    .col(string(Movies::Title))
                    .col(string(Movies::Year))
                    .col(string(Movies::Rated))
                    .col(string(Movies::Released))
                    .col(string(Movies::Runtime))
                    .col(string(Movies::Genre))
                    .col(string(Movies::Director))
                    .col(string(Movies::Writer))
                    .col(string(Movies::Actors))
                    .col(string(Movies::Plot))
                    .col(string(Movies::Poster))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_actors")
                    .table(Movies::Table)
                    .col(Movies::Actors)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    ImdbId,
    Title,
    Year,
    Rated,
    Released,
    Runtime,
    Genre,
    Director,
    Writer,
    Actors,
    Plot,
    Poster,
}
