//! Table rendering for the terminal views.

use rust_decimal::Decimal;
use tabled::{builder::Builder, settings::Style};
use tiendita::{
    cart::CartLine,
    orders::Order,
    products::{Category, Product},
    users::User,
};
use tiendita_client::dashboard::DashboardSummary;

/// Quetzal price formatting, two decimal places.
pub(crate) fn format_price(amount: Decimal) -> String {
    format!("Q{amount:.2}")
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();

    table.with(Style::sharp());

    table.to_string()
}

pub(crate) fn products_table(products: &[Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nombre", "Precio", "Stock", "Categoría", "Estado"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.nombre.clone(),
            format_price(product.precio),
            product.stock.map_or_else(String::new, |stock| stock.to_string()),
            product.categoria.clone().unwrap_or_default(),
            product.estado.to_string(),
        ]);
    }

    finish(builder)
}

pub(crate) fn cart_table(lines: &[CartLine], total: Decimal) -> String {
    let mut builder = Builder::default();

    builder.push_record(["#", "Producto", "Precio", "Cantidad", "Subtotal"]);

    for (index, line) in lines.iter().enumerate() {
        builder.push_record([
            index.to_string(),
            line.name.clone(),
            format_price(line.price),
            line.quantity.to_string(),
            format_price(line.subtotal()),
        ]);
    }

    builder.push_record([
        String::new(),
        "Total".to_string(),
        String::new(),
        String::new(),
        format_price(total),
    ]);

    finish(builder)
}

pub(crate) fn orders_table(orders: &[Order]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Pedido", "Cliente", "Productos", "Total", "Estado"]);

    for order in orders {
        builder.push_record([
            format!("#{}", order.pedido_id),
            order.cliente.clone(),
            order.productos.clone().unwrap_or_default(),
            format_price(order.total),
            order
                .estado
                .map_or_else(String::new, |estado| estado.to_string()),
        ]);
    }

    finish(builder)
}

pub(crate) fn users_table(users: &[User]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nombre", "Correo", "Teléfono", "Rol", "Estado"]);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            user.nombre.clone(),
            user.correo.clone(),
            user.telefono.clone().unwrap_or_default(),
            user.rol.clone().unwrap_or_default(),
            user.estado.clone().unwrap_or_default(),
        ]);
    }

    finish(builder)
}

pub(crate) fn categories_table(categories: &[Category]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nombre", "Estado"]);

    for category in categories {
        builder.push_record([
            category.id.to_string(),
            category.nombre.clone(),
            category.estado.clone().unwrap_or_default(),
        ]);
    }

    finish(builder)
}

pub(crate) fn dashboard_summary(summary: &DashboardSummary) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Usuarios", summary.total_usuarios.to_string().as_str()]);
    builder.push_record(["Productos", summary.total_productos.to_string().as_str()]);
    builder.push_record(["Categorías", summary.total_categorias.to_string().as_str()]);
    builder.push_record(["Órdenes", summary.total_ordenes.to_string().as_str()]);
    builder.push_record([
        "Órdenes pendientes",
        summary.ordenes_pendientes.to_string().as_str(),
    ]);

    if let Some(top) = &summary.usuario_con_mas_pedidos {
        builder.push_record([
            "Cliente con más pedidos",
            format!("{} ({})", top.nombre, top.pedidos).as_str(),
        ]);
    }

    finish(builder)
}
