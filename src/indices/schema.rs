use crate::core::Schema;

pub(crate) const INDICES: Schema = Schema {
    name: "indices",
    path: "indices",
    data_key: "indices",
    columns: &["Date", "Code", "Open", "High", "Low", "Close"],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date", "Code"],
};

pub(crate) const TOPIX: Schema = Schema {
    name: "indices_topix",
    path: "indices/topix",
    data_key: "topix",
    columns: &["Date", "Open", "High", "Low", "Close"],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date"],
};
