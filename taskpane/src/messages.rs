use common::{Category, FieldName, LoopControl, SortDirection};

#[derive(Clone, Debug)]
pub enum Msg {
    LoadCatalog { source_name: String, source: String },
    ChangeCategory(Category),
    ChangeFilter(String),
    ChangeSortDirection(SortDirection),
    ChooseField(FieldName),
    ChooseControlToken(LoopControl),
    CleanUp,
    DismissNotice,
}
