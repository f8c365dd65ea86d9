use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Identity,
    Secret,
    Compensation,
    AdjustmentDate,
    CurrentToken,
    TokenExpiry,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::Identity)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Secret).string().not_null())
                    .col(ColumnDef::new(Employees::Compensation).double().not_null())
                    .col(
                        ColumnDef::new(Employees::AdjustmentDate)
                            .timestamp()
                            .not_null(),
                    )
                    // NULL until first login; uniqueness only applies to issued tokens
                    .col(
                        ColumnDef::new(Employees::CurrentToken)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::TokenExpiry)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}
