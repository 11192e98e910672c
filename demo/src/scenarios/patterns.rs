//! Design-pattern scenario: settings, factory, observer, strategy

use super::expect_rejected;
use ::patterns::{
    CreditCard, CustomerObserver, Inbox, PaymentProcessor, Pix, ProductFactory, ProductKind,
    Publisher, Settings,
};
use rust_decimal_macros::dec;

pub fn run() -> anyhow::Result<()> {
    // Settings
    let mut settings = Settings::new();
    settings.set("app_name", "Minha Loja");
    settings.set("max_cart_items", 20);
    settings.set("maintenance", false);
    println!("Settings: {}", serde_json::to_string(&settings.all())?);

    // Factory
    let factory = ProductFactory::new();
    let phone = factory.create(ProductKind::Electronic, "Smartphone", dec!(2000))?;
    let novel = factory.create_from_tag("book", "Dom Casmurro", dec!(45.90))?;
    for product in [&phone, &novel] {
        println!(
            "\n{} - {} ({})",
            product.name(),
            product.price(),
            product.type_label()
        );
        if let Some(months) = product.warranty_months() {
            println!("  warranty: {} months", months);
        }
        println!("  formats: {}", product.formats().join(", "));
    }
    expect_rejected("Create a toy", factory.create_from_tag("toy", "Ball", dec!(10)))?;

    // Observer
    let ana = Inbox::new();
    let bruno = Inbox::new();
    let mut publisher: Publisher<String> = Publisher::new();
    publisher.subscribe(Box::new(CustomerObserver::new("Ana", ana.clone())));
    let leaving = publisher.subscribe(Box::new(CustomerObserver::new("Bruno", bruno.clone())));

    println!();
    publisher.publish("New product available: Smartphone".to_string())?;
    publisher.unsubscribe(leaving)?;
    publisher.publish("Black Friday starts tomorrow".to_string())?;
    println!("Ana received {}, Bruno received {}", ana.len(), bruno.len());

    // Strategy
    let mut processor = PaymentProcessor::new(Box::new(CreditCard::new("1234-5678-9012-3456")?));
    let receipt = processor.process(dec!(150))?;
    println!("\nPaid {} with {}", receipt.amount, receipt.method);

    processor.set_strategy(Box::new(Pix::new("ana@email.com")?));
    let receipt = processor.process(dec!(75.50))?;
    println!("Paid {} with {}", receipt.amount, receipt.method);
    expect_rejected("Pay zero", processor.process(dec!(0)))?;

    Ok(())
}
