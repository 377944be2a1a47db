use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AUTOINCREMENT keeps ids strictly increasing, deleted ids are never handed out again.
        // SQLite only accepts it on an INTEGER PRIMARY KEY, which is the 64-bit rowid.
        manager
            .create_table(
                Table::create()
                    .table(MockItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MockItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MockItems::Name).text().not_null())
                    .col(
                        ColumnDef::new(MockItems::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(MockItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MockItems::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MockItems {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
