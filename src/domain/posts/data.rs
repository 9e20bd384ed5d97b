use super::SeedPost;
use crate::domain::types::BlogStatus;

pub static SEED_POSTS: [SeedPost; 3] = [
    SeedPost {
        id: "1",
        title: "How to Find the Best Flight Deals",
        excerpt: "Discover insider tips and tricks for finding the cheapest flights for your next adventure.",
        content: "Finding the best flight deals requires strategy and timing. Here are some proven methods to save money on your next trip...",
        category: "Flight Tips",
        date: "2025-01-10",
        status: BlogStatus::Published,
        image: "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?w=400&h=200&fit=crop",
    },
    SeedPost {
        id: "2",
        title: "Ultimate Guide to Hotel Bookings",
        excerpt: "Learn how to book the perfect accommodation for your travels with these expert tips.",
        content: "Booking the right hotel can make or break your travel experience. Here's everything you need to know...",
        category: "Hotels",
        date: "2025-01-08",
        status: BlogStatus::Published,
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=400&h=200&fit=crop",
    },
    SeedPost {
        id: "3",
        title: "Visa Application Success Stories",
        excerpt: "Real experiences and tips from successful visa applications around the world.",
        content: "Getting a visa can be challenging, but with the right approach, you can increase your chances of success...",
        category: "Visa",
        date: "2025-01-05",
        status: BlogStatus::Draft,
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=200&fit=crop",
    },
];
